pub mod user_preference_repository;
pub mod user_repository;
