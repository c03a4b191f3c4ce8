use chrono::Utc;

use crate::domain::ingredient::entities::Ingredient;
use crate::entity::ingredients;

impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            category: model.category,
            nutritional_info: model.nutritional_info,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
