use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateConsumptionLogRequest {
    pub ingredient_id: Option<Uuid>,
    pub dish_id: Option<Uuid>,
    pub quantity: f64,
    pub unit: Option<String>,
    pub consumed_at: Option<DateTime<Utc>>,
}

/// One in-window log entry reduced to what recency aggregation needs: the
/// direct ingredient reference, or the dish's ingredient ids pre-joined by
/// the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentConsumption {
    pub ingredient_id: Option<Uuid>,
    pub dish_ingredient_ids: Vec<Uuid>,
}
