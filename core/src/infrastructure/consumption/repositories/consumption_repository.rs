use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    consumption::{
        entities::{ConsumptionLog, ConsumptionLogDetails},
        ports::ConsumptionLogRepository,
        value_objects::RecentConsumption,
    },
    dish::entities::DishWithIngredients,
    ingredient::entities::Ingredient,
};
use crate::entity::{
    consumption_logs::{ActiveModel, Column, Entity, Model},
    dish_ingredients, dishes, ingredients,
};
use crate::infrastructure::dish::mappers::map_dish_with_ingredients;

#[derive(Debug, Clone)]
pub struct PostgresConsumptionLogRepository {
    pub db: DatabaseConnection,
}

impl PostgresConsumptionLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_ingredients(
        &self,
        ingredient_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Ingredient>, CoreError> {
        if ingredient_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = ingredients::Entity::find()
            .filter(ingredients::Column::Id.is_in(ingredient_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredients for logs: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models
            .into_iter()
            .map(|model| (model.id, Ingredient::from(model)))
            .collect())
    }

    async fn load_dishes(
        &self,
        dish_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, DishWithIngredients>, CoreError> {
        if dish_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let dish_models = dishes::Entity::find()
            .filter(dishes::Column::Id.is_in(dish_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch dishes for logs: {}", e);
                CoreError::InternalServerError
            })?;

        let line_items = dish_ingredients::Entity::find()
            .filter(
                dish_ingredients::Column::DishId
                    .is_in(dish_models.iter().map(|dish| dish.id).collect::<Vec<_>>()),
            )
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch dish ingredients for logs: {}", e);
                CoreError::InternalServerError
            })?;

        let ingredients_by_id = self
            .load_ingredients(line_items.iter().map(|item| item.ingredient_id).collect())
            .await?;

        let mut items_by_dish: HashMap<Uuid, Vec<(dish_ingredients::Model, Ingredient)>> =
            HashMap::new();
        for item in line_items {
            if let Some(ingredient) = ingredients_by_id.get(&item.ingredient_id) {
                items_by_dish
                    .entry(item.dish_id)
                    .or_default()
                    .push((item, ingredient.clone()));
            }
        }

        Ok(dish_models
            .into_iter()
            .map(|dish| {
                let items = items_by_dish.remove(&dish.id).unwrap_or_default();
                (dish.id, map_dish_with_ingredients(dish, items))
            })
            .collect())
    }

    /// Join ingredient and dish details onto log rows, preserving row order.
    async fn join_details(
        &self,
        models: Vec<Model>,
    ) -> Result<Vec<ConsumptionLogDetails>, CoreError> {
        let ingredient_ids: Vec<Uuid> = models.iter().filter_map(|m| m.ingredient_id).collect();
        let dish_ids: Vec<Uuid> = models.iter().filter_map(|m| m.dish_id).collect();

        let ingredients_by_id = self.load_ingredients(ingredient_ids).await?;
        let dishes_by_id = self.load_dishes(dish_ids).await?;

        Ok(models
            .into_iter()
            .map(|model| {
                let ingredient = model
                    .ingredient_id
                    .and_then(|id| ingredients_by_id.get(&id).cloned());
                let dish = model.dish_id.and_then(|id| dishes_by_id.get(&id).cloned());

                ConsumptionLogDetails {
                    log: ConsumptionLog::from(model),
                    ingredient,
                    dish,
                }
            })
            .collect())
    }
}

impl ConsumptionLogRepository for PostgresConsumptionLogRepository {
    async fn create(&self, log: ConsumptionLog) -> Result<ConsumptionLogDetails, CoreError> {
        let active_model = ActiveModel {
            id: Set(log.id),
            user_id: Set(log.user_id),
            ingredient_id: Set(log.ingredient_id),
            dish_id: Set(log.dish_id),
            quantity: Set(log.quantity),
            unit: Set(log.unit),
            consumed_at: Set(log.consumed_at.fixed_offset()),
            created_at: Set(log.created_at.fixed_offset()),
        };

        let model = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create consumption log: {}", e);
                CoreError::InternalServerError
            })?;

        let mut details = self.join_details(vec![model]).await?;
        details.pop().ok_or(CoreError::InternalServerError)
    }

    async fn get_logs_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<ConsumptionLogDetails>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ConsumedAt.gte(since.fixed_offset()))
            .order_by_desc(Column::ConsumedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch consumption logs: {}", e);
                CoreError::InternalServerError
            })?;

        self.join_details(models).await
    }

    async fn get_recent_rows(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<RecentConsumption>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ConsumedAt.gte(since.fixed_offset()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recent consumption rows: {}", e);
                CoreError::InternalServerError
            })?;

        let dish_ids: Vec<Uuid> = models.iter().filter_map(|m| m.dish_id).collect();

        let mut ingredient_ids_by_dish: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        if !dish_ids.is_empty() {
            let line_items = dish_ingredients::Entity::find()
                .filter(dish_ingredients::Column::DishId.is_in(dish_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to fetch dish ingredients for recency: {}", e);
                    CoreError::InternalServerError
                })?;

            for item in line_items {
                ingredient_ids_by_dish
                    .entry(item.dish_id)
                    .or_default()
                    .push(item.ingredient_id);
            }
        }

        Ok(models
            .into_iter()
            .map(|model| RecentConsumption {
                ingredient_id: model.ingredient_id,
                dish_ingredient_ids: model
                    .dish_id
                    .and_then(|id| ingredient_ids_by_dish.get(&id).cloned())
                    .unwrap_or_default(),
            })
            .collect())
    }
}
