use axum::extract::{Query, State};
use chrono::{Duration, Utc};
use nutritrack_core::domain::consumption::ports::ConsumptionLogRepository;
use serde::Deserialize;
use utoipa::IntoParams;

use super::create_log::ConsumptionLogResponse;
use crate::application::auth::RequiredUser;
use crate::application::http::query_params::{DEFAULT_LOG_WINDOW_DAYS, window_days_or};
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetLogsQuery {
    /// Look-back window in days, default 30
    pub days: Option<i64>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "consumption",
    summary = "List consumption logs",
    description = "The user's logs inside the look-back window, newest first",
    params(GetLogsQuery),
    responses(
        (status = 200, body = Vec<ConsumptionLogResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_logs(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    Query(query): Query<GetLogsQuery>,
) -> Result<Response<Vec<ConsumptionLogResponse>>, ApiError> {
    let days = window_days_or(query.days, DEFAULT_LOG_WINDOW_DAYS);
    let since = Utc::now() - Duration::days(days as i64);

    let logs = state
        .consumption_repository
        .get_logs_since(identity.user_id, since)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        logs.into_iter().map(ConsumptionLogResponse::from).collect(),
    ))
}
