pub mod mappers;
pub mod repositories;

pub use repositories::ingredient_repository::PostgresIngredientRepository;
