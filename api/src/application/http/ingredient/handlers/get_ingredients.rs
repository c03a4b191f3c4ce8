use axum::extract::{Query, State};
use nutritrack_core::domain::ingredient::{
    entities::Ingredient,
    ports::IngredientRepository,
    value_objects::GetIngredientsFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::auth::RequiredUser;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

/// Public view of one catalog ingredient, shared by every ingredient response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IngredientResponse {
    pub id: uuid::Uuid,
    pub name: String,
    pub category: String,
    pub nutritional_info: Option<serde_json::Value>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
            category: ingredient.category,
            nutritional_info: ingredient.nutritional_info,
            created_at: ingredient.created_at,
            updated_at: ingredient.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetIngredientsQuery {
    /// Case-insensitive substring match on the name
    pub search: Option<String>,
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "List ingredients",
    description = "List the ingredient catalog, optionally filtered by name or category",
    params(GetIngredientsQuery),
    responses(
        (status = 200, body = Vec<IngredientResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
    Query(query): Query<GetIngredientsQuery>,
) -> Result<Response<Vec<IngredientResponse>>, ApiError> {
    let ingredients = state
        .ingredient_repository
        .get_all(GetIngredientsFilter {
            search: query.search,
            category: query.category,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        ingredients.into_iter().map(IngredientResponse::from).collect(),
    ))
}
