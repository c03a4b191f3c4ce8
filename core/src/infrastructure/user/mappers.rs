use chrono::Utc;

use crate::domain::user::entities::{User, UserPreference};
use crate::entity::{user_preferences, users};

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            avatar: model.avatar,
            provider: model.provider,
            provider_id: model.provider_id,
            email_verified: model.email_verified,
            password_hash: model.password_hash,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<user_preferences::Model> for UserPreference {
    fn from(model: user_preferences::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            avoid_period_days: model.avoid_period_days,
            dietary_restrictions: serde_json::from_value(model.dietary_restrictions)
                .unwrap_or_default(),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
