pub mod mappers;
pub mod repositories;

pub use repositories::user_preference_repository::PostgresUserPreferenceRepository;
pub use repositories::user_repository::PostgresUserRepository;
