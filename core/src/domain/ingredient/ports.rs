use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish::entities::Dish,
    ingredient::{
        entities::Ingredient,
        value_objects::{CreateIngredientRequest, GetIngredientsFilter, UpdateIngredientRequest},
    },
};

/// Repository trait for the ingredient catalog
#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn get_all(
        &self,
        filter: GetIngredientsFilter,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    /// Dishes that reference this ingredient, for the detail view.
    fn get_dishes_using(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Dish>, CoreError>> + Send;

    fn create(
        &self,
        request: CreateIngredientRequest,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update(
        &self,
        ingredient_id: Uuid,
        request: UpdateIngredientRequest,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete(&self, ingredient_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
