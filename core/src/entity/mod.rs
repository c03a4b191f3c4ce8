pub mod consumption_logs;
pub mod dish_ingredients;
pub mod dishes;
pub mod ingredients;
pub mod sessions;
pub mod user_preferences;
pub mod users;
