use axum::extract::State;
use nutritrack_core::domain::dish::{
    ports::DishRepository,
    value_objects::{CreateDishRequest, DishIngredientInput},
};

use super::get_dishes::DishResponse;
use crate::application::auth::RequiredUser;
use crate::application::http::dish::validators::CreateDishValidator;
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
    tag = "dish",
    summary = "Create dish",
    description = "Create a dish together with its ingredient line items",
    request_body = CreateDishValidator,
    responses(
        (status = 201, body = DishResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_dish(
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
    ValidateJson(payload): ValidateJson<CreateDishValidator>,
) -> Result<Response<DishResponse>, ApiError> {
    let dish = state
        .dish_repository
        .create(CreateDishRequest {
            name: payload.name,
            description: payload.description,
            instructions: payload.instructions,
            ingredients: payload
                .ingredients
                .into_iter()
                .map(|item| DishIngredientInput {
                    ingredient_id: item.ingredient_id,
                    quantity: item.quantity,
                    unit: item.unit,
                })
                .collect(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(DishResponse::from(dish)))
}
