use axum::extract::{Query, State};
use axum::response::Redirect;
use nutritrack_core::domain::{
    authentication::{
        entities::Session,
        ports::{OAuthClient, SessionRepository},
        services::generate_token,
        value_objects::OAuthUserProfile,
    },
    common::entities::app_errors::CoreError,
    user::{
        entities::{User, UserPreference},
        ports::{UserPreferenceRepository, UserRepository},
        value_objects::{CreateUserRequest, OAuthLink},
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

const PROVIDER: &str = "google";

#[derive(Debug, Deserialize, IntoParams)]
pub struct GoogleCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Find the account for this Google profile, linking or creating one as needed.
async fn resolve_user(state: &AppState, profile: OAuthUserProfile) -> Result<User, CoreError> {
    if let Some(user) = state
        .user_repository
        .get_by_provider(PROVIDER.to_string(), profile.provider_id.clone())
        .await?
    {
        return Ok(user);
    }

    if let Some(user) = state
        .user_repository
        .get_by_email(profile.email.clone())
        .await?
    {
        return state
            .user_repository
            .link_oauth(
                user.id,
                OAuthLink {
                    provider: PROVIDER.to_string(),
                    provider_id: profile.provider_id,
                    avatar: profile.avatar,
                },
            )
            .await;
    }

    let user = state
        .user_repository
        .create_user(CreateUserRequest {
            email: profile.email,
            name: profile.name,
            avatar: profile.avatar,
            provider: PROVIDER.to_string(),
            provider_id: Some(profile.provider_id),
            email_verified: profile.email_verified,
            password_hash: None,
        })
        .await?;

    state
        .preference_repository
        .create(UserPreference::default_for(user.id))
        .await?;

    Ok(user)
}

#[utoipa::path(
    get,
    path = "/google/callback",
    tag = "auth",
    summary = "Google callback",
    description = "Complete the Google login and redirect back to the frontend with a token",
    params(GoogleCallbackQuery),
    responses(
        (status = 307, description = "Redirect to the frontend"),
        (status = 501, description = "OAuth not configured")
    )
)]
pub async fn google_callback(
    State(state): State<AppState>,
    Query(query): Query<GoogleCallbackQuery>,
) -> Result<Redirect, ApiError> {
    let client = state
        .oauth_client
        .as_ref()
        .ok_or_else(|| ApiError::NotImplemented("Google OAuth is not configured".to_string()))?;

    let failure_url = format!("{}/login?error=oauth_failed", state.args.server.frontend_url);

    let code = match (query.code, query.error) {
        (Some(code), None) => code,
        _ => return Ok(Redirect::temporary(&failure_url)),
    };

    let outcome = async {
        let profile = client.exchange_code(&code).await?;
        let user = resolve_user(&state, profile).await?;

        let (token, expires_at) = generate_token(
            &user,
            &state.args.auth.jwt_secret,
            state.args.auth.session_ttl_days,
        )?;

        state
            .session_repository
            .create(Session::new(user.id, token.clone(), expires_at))
            .await?;

        Ok::<String, CoreError>(token)
    }
    .await;

    match outcome {
        Ok(token) => Ok(Redirect::temporary(&format!(
            "{}/auth/callback?token={}",
            state.args.server.frontend_url, token
        ))),
        Err(e) => {
            tracing::error!("Google login failed: {}", e);
            Ok(Redirect::temporary(&failure_url))
        }
    }
}
