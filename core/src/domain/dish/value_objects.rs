use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DishIngredientInput {
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDishRequest {
    pub name: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<DishIngredientInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateDishRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<String>,
    /// When present, replaces the whole ingredient line-item list.
    pub ingredients: Option<Vec<DishIngredientInput>>,
}

#[derive(Debug, Clone, Default)]
pub struct GetDishesFilter {
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
}
