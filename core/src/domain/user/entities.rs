use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;
use crate::domain::user::value_objects::CreateUserRequest;

pub const DEFAULT_AVOID_PERIOD_DAYS: i32 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub provider: String, // 'email' | 'google'
    pub provider_id: Option<String>,
    pub email_verified: bool,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(request: CreateUserRequest) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            email: request.email,
            name: request.name,
            avatar: request.avatar,
            provider: request.provider,
            provider_id: request.provider_id,
            email_verified: request.email_verified,
            password_hash: request.password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserPreference {
    pub id: Uuid,
    pub user_id: Uuid,
    pub avoid_period_days: i32,
    pub dietary_restrictions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserPreference {
    /// Default preferences created alongside a new user.
    pub fn default_for(user_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            avoid_period_days: DEFAULT_AVOID_PERIOD_DAYS,
            dietary_restrictions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
