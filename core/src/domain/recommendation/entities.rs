use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::dish::entities::DishWithIngredients;

/// A dish annotated with its freshness score for one recommendation request.
/// Derived and discarded per request; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoredDish {
    pub dish: DishWithIngredients,
    /// Fraction of ingredient line items not recently consumed, in [0, 1].
    pub freshness_score: f64,
    pub recent_ingredients: usize,
    pub total_ingredients: usize,
    pub reason: String,
}
