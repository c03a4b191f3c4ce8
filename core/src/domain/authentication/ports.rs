use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::{entities::Session, value_objects::OAuthUserProfile},
    common::entities::app_errors::CoreError,
};

/// Repository trait for login sessions
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn create(&self, session: Session) -> impl Future<Output = Result<Session, CoreError>> + Send;

    /// Delete the session matching this user and token. Missing sessions are not an error.
    fn delete_by_user_and_token(
        &self,
        user_id: Uuid,
        token: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Port for the external OAuth provider (Google).
#[cfg_attr(test, mockall::automock)]
pub trait OAuthClient: Send + Sync {
    /// Build the provider authorization URL the browser is redirected to.
    fn authorize_url(&self, state: &str) -> String;

    /// Exchange an authorization code for the provider's user profile.
    fn exchange_code(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<OAuthUserProfile, CoreError>> + Send;
}
