use axum::extract::{Path, State};
use nutritrack_core::domain::{
    common::entities::app_errors::CoreError,
    dish::{
        ports::DishRepository,
        value_objects::{DishIngredientInput, UpdateDishRequest},
    },
};

use super::get_dishes::DishResponse;
use crate::application::auth::RequiredUser;
use crate::application::http::dish::validators::UpdateDishValidator;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    put,
    path = "/{dish_id}",
    tag = "dish",
    summary = "Update dish",
    description = "Update dish fields. A provided ingredient list replaces the existing one.",
    params(
        ("dish_id" = uuid::Uuid, Path, description = "Dish id"),
    ),
    request_body = UpdateDishValidator,
    responses(
        (status = 200, body = DishResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Dish not found")
    )
)]
pub async fn update_dish(
    Path(dish_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
    ValidateJson(payload): ValidateJson<UpdateDishValidator>,
) -> Result<Response<DishResponse>, ApiError> {
    let dish = state
        .dish_repository
        .update(
            dish_id,
            UpdateDishRequest {
                name: payload.name,
                description: payload.description,
                instructions: payload.instructions,
                ingredients: payload.ingredients.map(|items| {
                    items
                        .into_iter()
                        .map(|item| DishIngredientInput {
                            ingredient_id: item.ingredient_id,
                            quantity: item.quantity,
                            unit: item.unit,
                        })
                        .collect()
                }),
            },
        )
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Dish not found".to_string()),
            other => ApiError::from(other),
        })?;

    Ok(Response::OK(DishResponse::from(dish)))
}
