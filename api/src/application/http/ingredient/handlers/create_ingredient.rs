use axum::extract::State;
use nutritrack_core::domain::ingredient::{
    ports::IngredientRepository, value_objects::CreateIngredientRequest,
};

use super::get_ingredients::IngredientResponse;
use crate::application::auth::RequiredUser;
use crate::application::http::ingredient::validators::CreateIngredientValidator;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "",
    tag = "ingredient",
    summary = "Create ingredient",
    request_body = CreateIngredientValidator,
    responses(
        (status = 201, body = IngredientResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Ingredient name already exists")
    )
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
    ValidateJson(payload): ValidateJson<CreateIngredientValidator>,
) -> Result<Response<IngredientResponse>, ApiError> {
    let ingredient = state
        .ingredient_repository
        .create(CreateIngredientRequest {
            name: payload.name,
            category: payload.category,
            nutritional_info: payload.nutritional_info,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(IngredientResponse::from(ingredient)))
}
