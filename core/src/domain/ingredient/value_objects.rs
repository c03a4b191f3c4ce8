use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateIngredientRequest {
    pub name: String,
    pub category: String,
    pub nutritional_info: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateIngredientRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub nutritional_info: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default)]
pub struct GetIngredientsFilter {
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
    pub category: Option<String>,
}
