use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::authentication::entities::JwtClaim;

/// Resolved identity of the acting user, injected by the HTTP auth layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<JwtClaim> for Identity {
    fn from(claim: JwtClaim) -> Self {
        Self {
            user_id: claim.sub,
            email: claim.email,
            name: claim.name,
        }
    }
}

/// Profile returned by an OAuth provider after a successful code exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthUserProfile {
    pub provider_id: String,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub email_verified: bool,
}
