use axum::Json;
use axum::extract::State;
use serde_json::json;

use crate::application::http::server::app_state::AppState;

/// API info endpoint at the root path.
pub async fn get_info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let root_path = &state.args.server.root_path;

    Json(json!({
        "message": "Nutrition API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": format!("{}/auth", root_path),
            "ingredients": format!("{}/ingredients", root_path),
            "dishes": format!("{}/dishes", root_path),
            "consumption": format!("{}/consumption", root_path),
            "recommendations": format!("{}/recommendations", root_path),
        },
    }))
}
