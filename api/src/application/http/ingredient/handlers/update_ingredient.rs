use axum::extract::{Path, State};
use nutritrack_core::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{ports::IngredientRepository, value_objects::UpdateIngredientRequest},
};

use super::get_ingredients::IngredientResponse;
use crate::application::auth::RequiredUser;
use crate::application::http::ingredient::validators::UpdateIngredientValidator;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    put,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Update ingredient",
    params(
        ("ingredient_id" = uuid::Uuid, Path, description = "Ingredient id"),
    ),
    request_body = UpdateIngredientValidator,
    responses(
        (status = 200, body = IngredientResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Ingredient not found"),
        (status = 409, description = "Ingredient name already exists")
    )
)]
pub async fn update_ingredient(
    Path(ingredient_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
    ValidateJson(payload): ValidateJson<UpdateIngredientValidator>,
) -> Result<Response<IngredientResponse>, ApiError> {
    let ingredient = state
        .ingredient_repository
        .update(
            ingredient_id,
            UpdateIngredientRequest {
                name: payload.name,
                category: payload.category,
                nutritional_info: payload.nutritional_info,
            },
        )
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Ingredient not found".to_string()),
            other => ApiError::from(other),
        })?;

    Ok(Response::OK(IngredientResponse::from(ingredient)))
}
