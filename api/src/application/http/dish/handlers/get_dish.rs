use axum::extract::{Path, State};
use nutritrack_core::domain::dish::ports::DishRepository;

use super::get_dishes::DishResponse;
use crate::application::auth::RequiredUser;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{dish_id}",
    tag = "dish",
    summary = "Get dish",
    params(
        ("dish_id" = uuid::Uuid, Path, description = "Dish id"),
    ),
    responses(
        (status = 200, body = DishResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Dish not found")
    )
)]
pub async fn get_dish(
    Path(dish_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
) -> Result<Response<DishResponse>, ApiError> {
    let dish = state
        .dish_repository
        .get_by_id(dish_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Dish not found".to_string()))?;

    Ok(Response::OK(DishResponse::from(dish)))
}
