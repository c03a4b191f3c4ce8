use super::handlers::{
    create_dish::{__path_create_dish, create_dish},
    delete_dish::{__path_delete_dish, delete_dish},
    get_dish::{__path_get_dish, get_dish},
    get_dishes::{__path_get_dishes, get_dishes},
    update_dish::{__path_update_dish, update_dish},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_dishes, get_dish, create_dish, update_dish, delete_dish))]
pub struct DishApiDoc;

pub fn dish_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();

    Router::new()
        .route(
            &format!("{}/dishes", root_path),
            post(create_dish).get(get_dishes),
        )
        .route(
            &format!("{}/dishes/{{dish_id}}", root_path),
            get(get_dish).put(update_dish).delete(delete_dish),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
