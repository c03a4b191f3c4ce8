use axum::extract::{Path, State};
use nutritrack_core::domain::{
    common::entities::app_errors::CoreError, ingredient::ports::IngredientRepository,
};

use crate::application::auth::RequiredUser;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Delete ingredient",
    description = "Delete an ingredient. Dish recipes and logs referencing it are removed by cascade.",
    params(
        ("ingredient_id" = uuid::Uuid, Path, description = "Ingredient id"),
    ),
    responses(
        (status = 204, description = "Ingredient deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Ingredient not found")
    )
)]
pub async fn delete_ingredient(
    Path(ingredient_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
) -> Result<Response<()>, ApiError> {
    state
        .ingredient_repository
        .delete(ingredient_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Ingredient not found".to_string()),
            other => ApiError::from(other),
        })?;

    Ok(Response::NoContent)
}
