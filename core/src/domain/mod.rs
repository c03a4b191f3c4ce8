pub mod authentication;
pub mod common;
pub mod consumption;
pub mod dish;
pub mod ingredient;
pub mod recommendation;
pub mod user;
