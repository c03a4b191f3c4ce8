use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish::{
        entities::DishWithIngredients,
        value_objects::{CreateDishRequest, GetDishesFilter, UpdateDishRequest},
    },
};

/// Repository trait for the dish catalog
#[cfg_attr(test, mockall::automock)]
pub trait DishRepository: Send + Sync {
    /// Full catalog with ingredient line items, in stable catalog order
    /// (creation order) unless the filter asks for a name search.
    fn get_all_with_ingredients(
        &self,
        filter: GetDishesFilter,
    ) -> impl Future<Output = Result<Vec<DishWithIngredients>, CoreError>> + Send;

    fn get_by_id(
        &self,
        dish_id: Uuid,
    ) -> impl Future<Output = Result<Option<DishWithIngredients>, CoreError>> + Send;

    fn create(
        &self,
        request: CreateDishRequest,
    ) -> impl Future<Output = Result<DishWithIngredients, CoreError>> + Send;

    fn update(
        &self,
        dish_id: Uuid,
        request: UpdateDishRequest,
    ) -> impl Future<Output = Result<DishWithIngredients, CoreError>> + Send;

    fn delete(&self, dish_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
