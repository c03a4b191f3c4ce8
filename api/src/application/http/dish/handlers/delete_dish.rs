use axum::extract::{Path, State};
use nutritrack_core::domain::{common::entities::app_errors::CoreError, dish::ports::DishRepository};

use crate::application::auth::RequiredUser;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{dish_id}",
    tag = "dish",
    summary = "Delete dish",
    description = "Delete a dish. Its line items and logs referencing it are removed by cascade.",
    params(
        ("dish_id" = uuid::Uuid, Path, description = "Dish id"),
    ),
    responses(
        (status = 204, description = "Dish deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Dish not found")
    )
)]
pub async fn delete_dish(
    Path(dish_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
) -> Result<Response<()>, ApiError> {
    state
        .dish_repository
        .delete(dish_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Dish not found".to_string()),
            other => ApiError::from(other),
        })?;

    Ok(Response::NoContent)
}
