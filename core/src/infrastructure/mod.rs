pub mod authentication;
pub mod consumption;
pub mod db;
pub mod dish;
pub mod ingredient;
pub mod oauth;
pub mod user;
