use axum::extract::State;
use nutritrack_core::domain::user::{
    entities::UserPreference,
    ports::{UserPreferenceRepository, UserRepository},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::signup::UserResponse;
use crate::application::auth::RequiredUser;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesResponse {
    pub avoid_period_days: i32,
    pub dietary_restrictions: Vec<String>,
}

impl From<UserPreference> for PreferencesResponse {
    fn from(preference: UserPreference) -> Self {
        Self {
            avoid_period_days: preference.avoid_period_days,
            dietary_restrictions: preference.dietary_restrictions,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetMeResponse {
    pub user: UserResponse,
    pub preferences: PreferencesResponse,
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    summary = "Current user",
    description = "Return the authenticated user together with their preferences",
    responses(
        (status = 200, body = GetMeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_me(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
) -> Result<Response<GetMeResponse>, ApiError> {
    let user = state
        .user_repository
        .get_by_id(identity.user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let preferences = state
        .preference_repository
        .get_by_user(user.id)
        .await
        .map_err(ApiError::from)?
        .unwrap_or_else(|| UserPreference::default_for(user.id));

    Ok(Response::OK(GetMeResponse {
        user: UserResponse::from(user),
        preferences: PreferencesResponse::from(preferences),
    }))
}
