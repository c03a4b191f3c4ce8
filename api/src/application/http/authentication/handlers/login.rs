use axum::extract::State;
use nutritrack_core::domain::{
    authentication::{
        entities::Session,
        ports::SessionRepository,
        services::{generate_token, verify_password},
    },
    user::ports::UserRepository,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::signup::UserResponse;
use crate::application::http::authentication::validators::LoginValidator;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Log in",
    description = "Authenticate with email and password",
    request_body = LoginValidator,
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let user = state
        .user_repository
        .get_by_email(payload.email)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    // OAuth-only accounts have no password to check against.
    let password_hash = user
        .password_hash
        .clone()
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    if !verify_password(&payload.password, &password_hash).map_err(ApiError::from)? {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let (token, expires_at) = generate_token(
        &user,
        &state.args.auth.jwt_secret,
        state.args.auth.session_ttl_days,
    )
    .map_err(ApiError::from)?;

    state
        .session_repository
        .create(Session::new(user.id, token.clone(), expires_at))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse {
        user: UserResponse::from(user),
        token,
    }))
}
