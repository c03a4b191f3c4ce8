use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsumptionLogValidator {
    #[serde(default)]
    pub ingredient_id: Option<Uuid>,

    #[serde(default)]
    pub dish_id: Option<Uuid>,

    #[validate(range(exclusive_min = 0.0, message = "quantity must be positive"))]
    pub quantity: f64,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub consumed_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl CreateConsumptionLogValidator {
    /// Exactly one of `ingredientId` / `dishId` must be present.
    pub fn has_single_target(&self) -> bool {
        self.ingredient_id.is_some() != self.dish_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator(ingredient_id: Option<Uuid>, dish_id: Option<Uuid>) -> CreateConsumptionLogValidator {
        CreateConsumptionLogValidator {
            ingredient_id,
            dish_id,
            quantity: 1.0,
            unit: None,
            consumed_at: None,
        }
    }

    #[test]
    fn single_target_accepts_exactly_one_reference() {
        assert!(validator(Some(Uuid::new_v4()), None).has_single_target());
        assert!(validator(None, Some(Uuid::new_v4())).has_single_target());
    }

    #[test]
    fn single_target_rejects_none_and_both() {
        assert!(!validator(None, None).has_single_target());
        assert!(!validator(Some(Uuid::new_v4()), Some(Uuid::new_v4())).has_single_target());
    }
}
