use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::UserPreference, ports::UserPreferenceRepository,
        value_objects::UpdatePreferencesRequest,
    },
};
use crate::entity::user_preferences::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct PostgresUserPreferenceRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserPreferenceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserPreferenceRepository for PostgresUserPreferenceRepository {
    async fn create(&self, preference: UserPreference) -> Result<UserPreference, CoreError> {
        let active_model = ActiveModel {
            id: Set(preference.id),
            user_id: Set(preference.user_id),
            avoid_period_days: Set(preference.avoid_period_days),
            dietary_restrictions: Set(serde_json::json!(preference.dietary_restrictions)),
            created_at: Set(preference.created_at.fixed_offset()),
            updated_at: Set(preference.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create user preferences: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(UserPreference::from(created))
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<UserPreference>, CoreError> {
        let preference = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user preferences: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(preference.map(UserPreference::from))
    }

    async fn update(
        &self,
        user_id: Uuid,
        request: UpdatePreferencesRequest,
    ) -> Result<UserPreference, CoreError> {
        let model = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load user preferences: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::NotFound)?;

        let mut active_model: ActiveModel = model.into();
        active_model.avoid_period_days = Set(request.avoid_period_days);
        active_model.dietary_restrictions = Set(serde_json::json!(request.dietary_restrictions));
        active_model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update user preferences: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(UserPreference::from(updated))
    }
}
