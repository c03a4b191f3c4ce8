use std::collections::HashMap;

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, extension::postgres::PgExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    dish::{
        entities::DishWithIngredients,
        ports::DishRepository,
        value_objects::{
            CreateDishRequest, DishIngredientInput, GetDishesFilter, UpdateDishRequest,
        },
    },
    ingredient::entities::Ingredient,
};
use crate::entity::{
    dish_ingredients,
    dishes::{ActiveModel, Column, Entity},
    ingredients,
};
use crate::infrastructure::dish::mappers::map_dish_with_ingredients;

#[derive(Debug, Clone)]
pub struct PostgresDishRepository {
    pub db: DatabaseConnection,
}

impl PostgresDishRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the joined line items for the given dishes, keyed by dish id.
    async fn load_line_items(
        &self,
        dish_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<(dish_ingredients::Model, Ingredient)>>, CoreError> {
        if dish_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let line_items = dish_ingredients::Entity::find()
            .filter(dish_ingredients::Column::DishId.is_in(dish_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch dish ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        let ingredient_ids: Vec<Uuid> = line_items
            .iter()
            .map(|item| item.ingredient_id)
            .collect();

        let ingredient_models = ingredients::Entity::find()
            .filter(ingredients::Column::Id.is_in(ingredient_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredients for dishes: {}", e);
                CoreError::InternalServerError
            })?;

        let ingredients_by_id: HashMap<Uuid, Ingredient> = ingredient_models
            .into_iter()
            .map(|model| (model.id, Ingredient::from(model)))
            .collect();

        let mut grouped: HashMap<Uuid, Vec<(dish_ingredients::Model, Ingredient)>> = HashMap::new();
        for item in line_items {
            if let Some(ingredient) = ingredients_by_id.get(&item.ingredient_id) {
                grouped
                    .entry(item.dish_id)
                    .or_default()
                    .push((item, ingredient.clone()));
            }
        }

        Ok(grouped)
    }

    async fn insert_line_items<C>(
        connection: &C,
        dish_id: Uuid,
        inputs: &[DishIngredientInput],
    ) -> Result<(), CoreError>
    where
        C: ConnectionTrait,
    {
        if inputs.is_empty() {
            return Ok(());
        }

        let models: Vec<dish_ingredients::ActiveModel> = inputs
            .iter()
            .map(|input| dish_ingredients::ActiveModel {
                id: Set(generate_uuid_v7()),
                dish_id: Set(dish_id),
                ingredient_id: Set(input.ingredient_id),
                quantity: Set(input.quantity),
                unit: Set(input.unit.clone()),
            })
            .collect();

        dish_ingredients::Entity::insert_many(models)
            .exec(connection)
            .await
            .map_err(|e| {
                error!("Failed to create dish ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}

impl DishRepository for PostgresDishRepository {
    async fn get_all_with_ingredients(
        &self,
        filter: GetDishesFilter,
    ) -> Result<Vec<DishWithIngredients>, CoreError> {
        let mut query = Entity::find();

        // Creation order keeps freshness tie-breaking stable; a name
        // search switches to alphabetical.
        query = match filter.search {
            Some(search) => query
                .filter(Expr::col(Column::Name).ilike(format!("%{}%", search)))
                .order_by_asc(Column::Name),
            None => query.order_by_asc(Column::CreatedAt),
        };

        let dish_models = query.all(&self.db).await.map_err(|e| {
            error!("Failed to fetch dishes: {}", e);
            CoreError::InternalServerError
        })?;

        let dish_ids: Vec<Uuid> = dish_models.iter().map(|dish| dish.id).collect();
        let mut line_items = self.load_line_items(&dish_ids).await?;

        Ok(dish_models
            .into_iter()
            .map(|dish| {
                let items = line_items.remove(&dish.id).unwrap_or_default();
                map_dish_with_ingredients(dish, items)
            })
            .collect())
    }

    async fn get_by_id(&self, dish_id: Uuid) -> Result<Option<DishWithIngredients>, CoreError> {
        let Some(dish) = Entity::find_by_id(dish_id).one(&self.db).await.map_err(|e| {
            error!("Failed to fetch dish: {}", e);
            CoreError::InternalServerError
        })?
        else {
            return Ok(None);
        };

        let mut line_items = self.load_line_items(&[dish.id]).await?;
        let items = line_items.remove(&dish.id).unwrap_or_default();

        Ok(Some(map_dish_with_ingredients(dish, items)))
    }

    async fn create(&self, request: CreateDishRequest) -> Result<DishWithIngredients, CoreError> {
        let dish_id = generate_uuid_v7();
        let now = Utc::now();

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let active_model = ActiveModel {
            id: Set(dish_id),
            name: Set(request.name),
            description: Set(request.description),
            instructions: Set(request.instructions),
            created_at: Set(now.fixed_offset()),
            updated_at: Set(now.fixed_offset()),
        };

        Entity::insert(active_model).exec(&txn).await.map_err(|e| {
            error!("Failed to create dish: {}", e);
            CoreError::InternalServerError
        })?;

        Self::insert_line_items(&txn, dish_id, &request.ingredients).await?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit dish creation: {}", e);
            CoreError::InternalServerError
        })?;

        self.get_by_id(dish_id)
            .await?
            .ok_or(CoreError::InternalServerError)
    }

    async fn update(
        &self,
        dish_id: Uuid,
        request: UpdateDishRequest,
    ) -> Result<DishWithIngredients, CoreError> {
        let model = Entity::find_by_id(dish_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load dish: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::NotFound)?;

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let mut active_model: ActiveModel = model.into();
        if let Some(name) = request.name {
            active_model.name = Set(name);
        }
        if let Some(description) = request.description {
            active_model.description = Set(Some(description));
        }
        if let Some(instructions) = request.instructions {
            active_model.instructions = Set(Some(instructions));
        }
        active_model.updated_at = Set(Utc::now().fixed_offset());

        Entity::update(active_model).exec(&txn).await.map_err(|e| {
            error!("Failed to update dish: {}", e);
            CoreError::InternalServerError
        })?;

        // A provided list replaces all existing line items.
        if let Some(inputs) = request.ingredients {
            dish_ingredients::Entity::delete_many()
                .filter(dish_ingredients::Column::DishId.eq(dish_id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to clear dish ingredients: {}", e);
                    CoreError::InternalServerError
                })?;

            Self::insert_line_items(&txn, dish_id, &inputs).await?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit dish update: {}", e);
            CoreError::InternalServerError
        })?;

        self.get_by_id(dish_id)
            .await?
            .ok_or(CoreError::InternalServerError)
    }

    async fn delete(&self, dish_id: Uuid) -> Result<(), CoreError> {
        let result = Entity::delete_by_id(dish_id).exec(&self.db).await.map_err(|e| {
            error!("Failed to delete dish: {}", e);
            CoreError::InternalServerError
        })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
