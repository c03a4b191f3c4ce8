use chrono::Utc;

use crate::domain::consumption::entities::ConsumptionLog;
use crate::entity::consumption_logs;

impl From<consumption_logs::Model> for ConsumptionLog {
    fn from(model: consumption_logs::Model) -> Self {
        ConsumptionLog {
            id: model.id,
            user_id: model.user_id,
            ingredient_id: model.ingredient_id,
            dish_id: model.dish_id,
            quantity: model.quantity,
            unit: model.unit,
            consumed_at: model.consumed_at.with_timezone(&Utc),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
