use axum::extract::State;
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use nutritrack_core::domain::authentication::ports::SessionRepository;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredUser;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    summary = "Log out",
    description = "Invalidate the session behind the presented token",
    responses(
        (status = 200, body = LogoutResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
) -> Result<Response<LogoutResponse>, ApiError> {
    state
        .session_repository
        .delete_by_user_and_token(identity.user_id, bearer.token().to_string())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}
