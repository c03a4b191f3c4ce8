pub mod mappers;
pub mod repositories;

pub use repositories::dish_repository::PostgresDishRepository;
