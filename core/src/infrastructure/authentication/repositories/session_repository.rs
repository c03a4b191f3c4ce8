use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    authentication::{entities::Session, ports::SessionRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::sessions::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct PostgresSessionRepository {
    pub db: DatabaseConnection,
}

impl PostgresSessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SessionRepository for PostgresSessionRepository {
    async fn create(&self, session: Session) -> Result<Session, CoreError> {
        let active_model = ActiveModel {
            id: Set(session.id),
            user_id: Set(session.user_id),
            token: Set(session.token.clone()),
            expires_at: Set(session.expires_at.fixed_offset()),
            created_at: Set(session.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create session: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Session {
            id: created.id,
            user_id: created.user_id,
            token: created.token,
            expires_at: created.expires_at.with_timezone(&Utc),
            created_at: created.created_at.with_timezone(&Utc),
        })
    }

    async fn delete_by_user_and_token(&self, user_id: Uuid, token: String) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Token.eq(token))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete session: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
