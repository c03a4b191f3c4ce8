use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishIngredientValidator {
    pub ingredient_id: Uuid,

    #[validate(range(exclusive_min = 0.0, message = "quantity must be positive"))]
    pub quantity: f64,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDishValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub instructions: Option<String>,

    #[validate(
        length(min = 1, message = "at least one ingredient is required"),
        nested
    )]
    pub ingredients: Vec<DishIngredientValidator>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDishValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub instructions: Option<String>,

    /// When present, replaces the whole ingredient list
    #[serde(default)]
    #[validate(
        length(min = 1, message = "at least one ingredient is required"),
        nested
    )]
    pub ingredients: Option<Vec<DishIngredientValidator>>,
}
