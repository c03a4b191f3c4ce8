use axum::extract::State;
use nutritrack_core::domain::consumption::{
    entities::{ConsumptionLog, ConsumptionLogDetails},
    ports::ConsumptionLogRepository,
    value_objects::CreateConsumptionLogRequest,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredUser;
use crate::application::http::consumption::validators::CreateConsumptionLogValidator;
use crate::application::http::dish::handlers::get_dishes::DishResponse;
use crate::application::http::ingredient::handlers::get_ingredients::IngredientResponse;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};

/// One log entry joined to what was consumed, shared by the list endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionLogResponse {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub ingredient_id: Option<uuid::Uuid>,
    pub dish_id: Option<uuid::Uuid>,
    pub quantity: f64,
    pub unit: Option<String>,
    pub consumed_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub ingredient: Option<IngredientResponse>,
    pub dish: Option<DishResponse>,
}

impl From<ConsumptionLogDetails> for ConsumptionLogResponse {
    fn from(details: ConsumptionLogDetails) -> Self {
        Self {
            id: details.log.id,
            user_id: details.log.user_id,
            ingredient_id: details.log.ingredient_id,
            dish_id: details.log.dish_id,
            quantity: details.log.quantity,
            unit: details.log.unit,
            consumed_at: details.log.consumed_at,
            created_at: details.log.created_at,
            ingredient: details.ingredient.map(IngredientResponse::from),
            dish: details.dish.map(DishResponse::from),
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "consumption",
    summary = "Log consumption",
    description = "Record that the user ate an ingredient or a dish. Exactly one of ingredientId and dishId must be set.",
    request_body = CreateConsumptionLogValidator,
    responses(
        (status = 201, body = ConsumptionLogResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_log(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    ValidateJson(payload): ValidateJson<CreateConsumptionLogValidator>,
) -> Result<Response<ConsumptionLogResponse>, ApiError> {
    if !payload.has_single_target() {
        return Err(ApiError::BadRequest(
            "Either ingredientId or dishId must be provided, but not both".to_string(),
        ));
    }

    let log = ConsumptionLog::new(
        identity.user_id,
        CreateConsumptionLogRequest {
            ingredient_id: payload.ingredient_id,
            dish_id: payload.dish_id,
            quantity: payload.quantity,
            unit: payload.unit,
            consumed_at: payload.consumed_at,
        },
    );

    let created = state
        .consumption_repository
        .create(log)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ConsumptionLogResponse::from(created)))
}
