use axum::extract::State;
use axum::response::Redirect;
use nutritrack_core::domain::{authentication::ports::OAuthClient, common::generate_random_string};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/google",
    tag = "auth",
    summary = "Google login",
    description = "Redirect the browser to Google's consent screen",
    responses(
        (status = 307, description = "Redirect to Google"),
        (status = 501, description = "OAuth not configured")
    )
)]
pub async fn google_redirect(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    let client = state
        .oauth_client
        .as_ref()
        .ok_or_else(|| ApiError::NotImplemented("Google OAuth is not configured".to_string()))?;

    let url = client.authorize_url(&generate_random_string(32));

    Ok(Redirect::temporary(&url))
}
