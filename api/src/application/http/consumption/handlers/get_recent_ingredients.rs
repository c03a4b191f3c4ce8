use axum::extract::{Query, State};
use nutritrack_core::domain::recommendation::services::compute_recent_ingredients;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::auth::RequiredUser;
use crate::application::http::query_params::window_days;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentIngredientsQuery {
    /// Look-back window in days, default 7
    pub days: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentIngredientsResponse {
    pub recent_ingredient_ids: Vec<uuid::Uuid>,
    pub days: u32,
}

#[utoipa::path(
    get,
    path = "/recent-ingredients",
    tag = "consumption",
    summary = "Recently consumed ingredients",
    description = "Distinct ingredient ids the user consumed inside the window, with dish logs expanded to their ingredients",
    params(RecentIngredientsQuery),
    responses(
        (status = 200, body = RecentIngredientsResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_recent_ingredients(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    Query(query): Query<RecentIngredientsQuery>,
) -> Result<Response<RecentIngredientsResponse>, ApiError> {
    let days = window_days(query.days);

    let recent = compute_recent_ingredients(
        state.consumption_repository.as_ref(),
        identity.user_id,
        days,
    )
    .await
    .map_err(ApiError::from)?;

    let mut recent_ingredient_ids: Vec<uuid::Uuid> = recent.into_iter().collect();
    recent_ingredient_ids.sort();

    Ok(Response::OK(RecentIngredientsResponse {
        recent_ingredient_ids,
        days,
    }))
}
