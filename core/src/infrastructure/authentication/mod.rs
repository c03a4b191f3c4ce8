pub mod repositories;

pub use repositories::session_repository::PostgresSessionRepository;
