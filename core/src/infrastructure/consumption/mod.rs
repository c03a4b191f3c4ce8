pub mod mappers;
pub mod repositories;

pub use repositories::consumption_repository::PostgresConsumptionLogRepository;
