use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::User,
        ports::UserRepository,
        value_objects::{CreateUserRequest, OAuthLink},
    },
};
use crate::entity::users::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, CoreError> {
        let user = User::new(request);

        let active_model = ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            avatar: Set(user.avatar.clone()),
            provider: Set(user.provider.clone()),
            provider_id: Set(user.provider_id.clone()),
            email_verified: Set(user.email_verified),
            password_hash: Set(user.password_hash.clone()),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    return CoreError::Conflict("user".to_string());
                }
                error!("Failed to create user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(User::from(created))
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn get_by_provider(
        &self,
        provider: String,
        provider_id: String,
    ) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Provider.eq(provider))
            .filter(Column::ProviderId.eq(provider_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by provider: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn link_oauth(&self, user_id: Uuid, link: OAuthLink) -> Result<User, CoreError> {
        let model = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load user for oauth link: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::NotFound)?;

        let mut active_model: ActiveModel = model.into();
        active_model.provider = Set(link.provider);
        active_model.provider_id = Set(Some(link.provider_id));
        if link.avatar.is_some() {
            active_model.avatar = Set(link.avatar);
        }
        active_model.email_verified = Set(true);
        active_model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to link oauth identity: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(User::from(updated))
    }
}
