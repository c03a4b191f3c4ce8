pub mod create_log;
pub mod get_logs;
pub mod get_recent_ingredients;
