use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub provider: String,
    pub provider_id: Option<String>,
    pub email_verified: bool,
    pub password_hash: Option<String>,
}

/// Fields written when an existing account is linked to an OAuth login.
#[derive(Debug, Clone)]
pub struct OAuthLink {
    pub provider: String,
    pub provider_id: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePreferencesRequest {
    pub avoid_period_days: i32,
    pub dietary_restrictions: Vec<String>,
}
