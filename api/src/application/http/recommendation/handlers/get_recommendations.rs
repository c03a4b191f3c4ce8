use axum::extract::{Query, State};
use nutritrack_core::domain::{
    dish::{ports::DishRepository, value_objects::GetDishesFilter},
    recommendation::{
        entities::ScoredDish,
        services::{compute_recent_ingredients, rank_dishes},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::auth::RequiredUser;
use crate::application::http::dish::handlers::get_dishes::DishIngredientResponse;
use crate::application::http::query_params::{result_limit, window_days};
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetRecommendationsQuery {
    /// Look-back window in days, default 7
    pub days: Option<i64>,
    /// Maximum number of dishes returned, default 10
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub dish_ingredients: Vec<DishIngredientResponse>,
    pub freshness_score: f64,
    pub recent_ingredients: usize,
    pub total_ingredients: usize,
    pub reason: String,
}

impl From<ScoredDish> for RecommendationResponse {
    fn from(scored: ScoredDish) -> Self {
        Self {
            id: scored.dish.id,
            name: scored.dish.name,
            description: scored.dish.description,
            instructions: scored.dish.instructions,
            dish_ingredients: scored
                .dish
                .dish_ingredients
                .into_iter()
                .map(DishIngredientResponse::from)
                .collect(),
            freshness_score: scored.freshness_score,
            recent_ingredients: scored.recent_ingredients,
            total_ingredients: scored.total_ingredients,
            reason: scored.reason,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "recommendation",
    summary = "Dish recommendations",
    description = "Rank the dish catalog by ingredient freshness for the authenticated user, freshest first",
    params(GetRecommendationsQuery),
    responses(
        (status = 200, body = Vec<RecommendationResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    Query(query): Query<GetRecommendationsQuery>,
) -> Result<Response<Vec<RecommendationResponse>>, ApiError> {
    let days = window_days(query.days);
    let limit = result_limit(query.limit);

    let recent = compute_recent_ingredients(
        state.consumption_repository.as_ref(),
        identity.user_id,
        days,
    )
    .await
    .map_err(ApiError::from)?;

    let dishes = state
        .dish_repository
        .get_all_with_ingredients(GetDishesFilter::default())
        .await
        .map_err(ApiError::from)?;

    let ranked = rank_dishes(&dishes, &recent, limit);

    Ok(Response::OK(
        ranked.into_iter().map(RecommendationResponse::from).collect(),
    ))
}
