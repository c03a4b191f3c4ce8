use axum::extract::{Query, State};
use nutritrack_core::domain::dish::{
    entities::{DishIngredient, DishWithIngredients},
    ports::DishRepository,
    value_objects::GetDishesFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::auth::RequiredUser;
use crate::application::http::ingredient::handlers::get_ingredients::IngredientResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishIngredientResponse {
    pub id: uuid::Uuid,
    pub ingredient_id: uuid::Uuid,
    pub quantity: f64,
    pub unit: String,
    pub ingredient: IngredientResponse,
}

impl From<DishIngredient> for DishIngredientResponse {
    fn from(item: DishIngredient) -> Self {
        Self {
            id: item.id,
            ingredient_id: item.ingredient_id,
            quantity: item.quantity,
            unit: item.unit,
            ingredient: IngredientResponse::from(item.ingredient),
        }
    }
}

/// Public view of a dish with its recipe, shared by every dish response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishResponse {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub dish_ingredients: Vec<DishIngredientResponse>,
}

impl From<DishWithIngredients> for DishResponse {
    fn from(dish: DishWithIngredients) -> Self {
        Self {
            id: dish.id,
            name: dish.name,
            description: dish.description,
            instructions: dish.instructions,
            created_at: dish.created_at,
            updated_at: dish.updated_at,
            dish_ingredients: dish
                .dish_ingredients
                .into_iter()
                .map(DishIngredientResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetDishesQuery {
    /// Case-insensitive substring match on the name
    pub search: Option<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "dish",
    summary = "List dishes",
    description = "List the dish catalog with full ingredient line items",
    params(GetDishesQuery),
    responses(
        (status = 200, body = Vec<DishResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_dishes(
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
    Query(query): Query<GetDishesQuery>,
) -> Result<Response<Vec<DishResponse>>, ApiError> {
    let dishes = state
        .dish_repository
        .get_all_with_ingredients(GetDishesFilter {
            search: query.search,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        dishes.into_iter().map(DishResponse::from).collect(),
    ))
}
