use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{User, UserPreference},
        value_objects::{CreateUserRequest, OAuthLink, UpdatePreferencesRequest},
    },
};

/// Repository trait for user accounts
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_provider(
        &self,
        provider: String,
        provider_id: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Link an existing account to an OAuth identity and mark the email verified.
    fn link_oauth(
        &self,
        user_id: Uuid,
        link: OAuthLink,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}

/// Repository trait for per-user preferences
#[cfg_attr(test, mockall::automock)]
pub trait UserPreferenceRepository: Send + Sync {
    fn create(
        &self,
        preference: UserPreference,
    ) -> impl Future<Output = Result<UserPreference, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserPreference>, CoreError>> + Send;

    fn update(
        &self,
        user_id: Uuid,
        request: UpdatePreferencesRequest,
    ) -> impl Future<Output = Result<UserPreference, CoreError>> + Send;
}
