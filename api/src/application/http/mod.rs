pub mod authentication;
pub mod consumption;
pub mod dish;
pub mod health;
pub mod ingredient;
pub mod query_params;
pub mod recommendation;
pub mod server;
