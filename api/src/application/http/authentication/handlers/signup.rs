use axum::extract::State;
use nutritrack_core::domain::{
    authentication::{
        entities::Session,
        ports::SessionRepository,
        services::{generate_token, hash_password},
    },
    user::{
        entities::{User, UserPreference},
        ports::{UserPreferenceRepository, UserRepository},
        value_objects::CreateUserRequest,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::authentication::validators::SignupValidator;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};

/// Public view of a user account, shared by every auth response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: uuid::Uuid,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub provider: String,
    pub email_verified: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            avatar: user.avatar,
            provider: user.provider,
            email_verified: user.email_verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    pub user: UserResponse,
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    summary = "Sign up",
    description = "Register a new account with email and password",
    request_body = SignupValidator,
    responses(
        (status = 201, body = SignupResponse, description = "Account created"),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SignupValidator>,
) -> Result<Response<SignupResponse>, ApiError> {
    let existing = state
        .user_repository
        .get_by_email(payload.email.clone())
        .await
        .map_err(ApiError::from)?;

    if existing.is_some() {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let password_hash = hash_password(&payload.password).map_err(ApiError::from)?;

    let user = state
        .user_repository
        .create_user(CreateUserRequest {
            email: payload.email,
            name: payload.name,
            avatar: None,
            provider: "email".to_string(),
            provider_id: None,
            email_verified: false,
            password_hash: Some(password_hash),
        })
        .await
        .map_err(ApiError::from)?;

    state
        .preference_repository
        .create(UserPreference::default_for(user.id))
        .await
        .map_err(ApiError::from)?;

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

    Ok(Response::Created(SignupResponse {
        user: UserResponse::from(user),
        token,
    }))
}
