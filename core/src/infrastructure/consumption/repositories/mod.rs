pub mod consumption_repository;
