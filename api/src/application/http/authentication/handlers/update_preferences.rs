use axum::extract::State;
use nutritrack_core::domain::user::{
    entities::UserPreference, ports::UserPreferenceRepository,
    value_objects::UpdatePreferencesRequest,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::get_me::PreferencesResponse;
use crate::application::auth::RequiredUser;
use crate::application::http::authentication::validators::UpdatePreferencesValidator;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePreferencesResponse {
    pub preferences: PreferencesResponse,
}

#[utoipa::path(
    put,
    path = "/preferences",
    tag = "auth",
    summary = "Update preferences",
    description = "Update the authenticated user's recommendation preferences. Omitted fields keep their current value.",
    request_body = UpdatePreferencesValidator,
    responses(
        (status = 200, body = UpdatePreferencesResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    ValidateJson(payload): ValidateJson<UpdatePreferencesValidator>,
) -> Result<Response<UpdatePreferencesResponse>, ApiError> {
    // Signup creates a preference row, but OAuth users from before the
    // default existed may not have one yet.
    let current = match state
        .preference_repository
        .get_by_user(identity.user_id)
        .await
        .map_err(ApiError::from)?
    {
        Some(preference) => preference,
        None => state
            .preference_repository
            .create(UserPreference::default_for(identity.user_id))
            .await
            .map_err(ApiError::from)?,
    };

    let updated = state
        .preference_repository
        .update(
            identity.user_id,
            UpdatePreferencesRequest {
                avoid_period_days: payload
                    .avoid_period_days
                    .unwrap_or(current.avoid_period_days),
                dietary_restrictions: payload
                    .dietary_restrictions
                    .unwrap_or(current.dietary_restrictions),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdatePreferencesResponse {
        preferences: PreferencesResponse::from(updated),
    }))
}
