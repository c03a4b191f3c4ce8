use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    consumption::value_objects::CreateConsumptionLogRequest,
    dish::entities::DishWithIngredients,
    ingredient::entities::Ingredient,
};

/// One consumption log entry. Exactly one of `ingredient_id` / `dish_id` is
/// set; the HTTP boundary rejects anything else before it reaches here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConsumptionLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ingredient_id: Option<Uuid>,
    pub dish_id: Option<Uuid>,
    pub quantity: f64,
    pub unit: Option<String>,
    pub consumed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ConsumptionLog {
    pub fn new(user_id: Uuid, request: CreateConsumptionLogRequest) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            ingredient_id: request.ingredient_id,
            dish_id: request.dish_id,
            quantity: request.quantity,
            unit: request.unit,
            consumed_at: request.consumed_at.unwrap_or(now),
            created_at: now,
        }
    }
}

/// A log entry joined to what was consumed, for list and create responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConsumptionLogDetails {
    pub log: ConsumptionLog,
    pub ingredient: Option<Ingredient>,
    pub dish: Option<DishWithIngredients>,
}
