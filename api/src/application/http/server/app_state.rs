use std::sync::Arc;

use nutritrack_core::infrastructure::{
    authentication::PostgresSessionRepository,
    consumption::PostgresConsumptionLogRepository,
    dish::PostgresDishRepository,
    ingredient::PostgresIngredientRepository,
    oauth::GoogleOAuthClient,
    user::{PostgresUserPreferenceRepository, PostgresUserRepository},
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub user_repository: Arc<PostgresUserRepository>,
    pub preference_repository: Arc<PostgresUserPreferenceRepository>,
    pub session_repository: Arc<PostgresSessionRepository>,
    pub ingredient_repository: Arc<PostgresIngredientRepository>,
    pub dish_repository: Arc<PostgresDishRepository>,
    pub consumption_repository: Arc<PostgresConsumptionLogRepository>,
    pub oauth_client: Option<Arc<GoogleOAuthClient>>,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        args: Arc<Args>,
        user_repository: PostgresUserRepository,
        preference_repository: PostgresUserPreferenceRepository,
        session_repository: PostgresSessionRepository,
        ingredient_repository: PostgresIngredientRepository,
        dish_repository: PostgresDishRepository,
        consumption_repository: PostgresConsumptionLogRepository,
        oauth_client: Option<GoogleOAuthClient>,
    ) -> Self {
        Self {
            args,
            user_repository: Arc::new(user_repository),
            preference_repository: Arc::new(preference_repository),
            session_repository: Arc::new(session_repository),
            ingredient_repository: Arc::new(ingredient_repository),
            dish_repository: Arc::new(dish_repository),
            consumption_repository: Arc::new(consumption_repository),
            oauth_client: oauth_client.map(Arc::new),
        }
    }
}
