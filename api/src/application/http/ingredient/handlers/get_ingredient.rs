use axum::extract::{Path, State};
use nutritrack_core::domain::{dish::entities::Dish, ingredient::ports::IngredientRepository};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::get_ingredients::IngredientResponse;
use crate::application::auth::RequiredUser;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishSummary {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<Dish> for DishSummary {
    fn from(dish: Dish) -> Self {
        Self {
            id: dish.id,
            name: dish.name,
            description: dish.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetIngredientResponse {
    #[serde(flatten)]
    pub ingredient: IngredientResponse,
    /// Dishes whose recipe references this ingredient
    pub dishes: Vec<DishSummary>,
}

#[utoipa::path(
    get,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Get ingredient",
    description = "Fetch one ingredient together with the dishes that use it",
    params(
        ("ingredient_id" = uuid::Uuid, Path, description = "Ingredient id"),
    ),
    responses(
        (status = 200, body = GetIngredientResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Ingredient not found")
    )
)]
pub async fn get_ingredient(
    Path(ingredient_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
) -> Result<Response<GetIngredientResponse>, ApiError> {
    let ingredient = state
        .ingredient_repository
        .get_by_id(ingredient_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Ingredient not found".to_string()))?;

    let dishes = state
        .ingredient_repository
        .get_dishes_using(ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientResponse {
        ingredient: IngredientResponse::from(ingredient),
        dishes: dishes.into_iter().map(DishSummary::from).collect(),
    }))
}
