use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, extension::postgres::PgExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish::entities::Dish,
    ingredient::{
        entities::Ingredient,
        ports::IngredientRepository,
        value_objects::{CreateIngredientRequest, GetIngredientsFilter, UpdateIngredientRequest},
    },
};
use crate::entity::{
    dish_ingredients,
    dishes,
    ingredients::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn get_all(&self, filter: GetIngredientsFilter) -> Result<Vec<Ingredient>, CoreError> {
        let mut query = Entity::find();

        if let Some(search) = filter.search {
            query = query.filter(Expr::col(Column::Name).ilike(format!("%{}%", search)));
        }

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category));
        }

        let ingredients = query
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredients: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Ingredient::from)
            .collect();

        Ok(ingredients)
    }

    async fn get_by_id(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = Entity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ingredient.map(Ingredient::from))
    }

    async fn get_dishes_using(&self, ingredient_id: Uuid) -> Result<Vec<Dish>, CoreError> {
        let line_items = dish_ingredients::Entity::find()
            .filter(dish_ingredients::Column::IngredientId.eq(ingredient_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch dish references: {}", e);
                CoreError::InternalServerError
            })?;

        let mut dish_ids: Vec<Uuid> = line_items.into_iter().map(|item| item.dish_id).collect();
        dish_ids.sort();
        dish_ids.dedup();

        if dish_ids.is_empty() {
            return Ok(Vec::new());
        }

        let dishes = dishes::Entity::find()
            .filter(dishes::Column::Id.is_in(dish_ids))
            .order_by_asc(dishes::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch dishes for ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(dishes.into_iter().map(Dish::from).collect())
    }

    async fn create(&self, request: CreateIngredientRequest) -> Result<Ingredient, CoreError> {
        let ingredient = Ingredient::new(request);

        let active_model = ActiveModel {
            id: Set(ingredient.id),
            name: Set(ingredient.name.clone()),
            category: Set(ingredient.category.clone()),
            nutritional_info: Set(ingredient.nutritional_info.clone()),
            created_at: Set(ingredient.created_at.fixed_offset()),
            updated_at: Set(ingredient.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    return CoreError::Conflict("ingredient name".to_string());
                }
                error!("Failed to create ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Ingredient::from(created))
    }

    async fn update(
        &self,
        ingredient_id: Uuid,
        request: UpdateIngredientRequest,
    ) -> Result<Ingredient, CoreError> {
        let model = Entity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load ingredient: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::NotFound)?;

        let mut active_model: ActiveModel = model.into();
        if let Some(name) = request.name {
            active_model.name = Set(name);
        }
        if let Some(category) = request.category {
            active_model.category = Set(category);
        }
        if let Some(nutritional_info) = request.nutritional_info {
            active_model.nutritional_info = Set(Some(nutritional_info));
        }
        active_model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    return CoreError::Conflict("ingredient name".to_string());
                }
                error!("Failed to update ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Ingredient::from(updated))
    }

    async fn delete(&self, ingredient_id: Uuid) -> Result<(), CoreError> {
        let result = Entity::delete_by_id(ingredient_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
