use super::handlers::{
    create_log::{__path_create_log, create_log},
    get_logs::{__path_get_logs, get_logs},
    get_recent_ingredients::{__path_get_recent_ingredients, get_recent_ingredients},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_log, get_logs, get_recent_ingredients))]
pub struct ConsumptionApiDoc;

pub fn consumption_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();

    Router::new()
        .route(
            &format!("{}/consumption", root_path),
            post(create_log).get(get_logs),
        )
        .route(
            &format!("{}/consumption/recent-ingredients", root_path),
            get(get_recent_ingredients),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
