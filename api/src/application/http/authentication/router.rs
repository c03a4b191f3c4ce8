use super::handlers::{
    get_me::{__path_get_me, get_me},
    google_callback::{__path_google_callback, google_callback},
    google_redirect::{__path_google_redirect, google_redirect},
    login::{__path_login, login},
    logout::{__path_logout, logout},
    signup::{__path_signup, signup},
    update_preferences::{__path_update_preferences, update_preferences},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    signup,
    login,
    logout,
    get_me,
    update_preferences,
    google_redirect,
    google_callback
))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();

    let public = Router::new()
        .route(&format!("{}/auth/signup", root_path), post(signup))
        .route(&format!("{}/auth/login", root_path), post(login))
        .route(&format!("{}/auth/google", root_path), get(google_redirect))
        .route(
            &format!("{}/auth/google/callback", root_path),
            get(google_callback),
        );

    let protected = Router::new()
        .route(&format!("{}/auth/logout", root_path), post(logout))
        .route(&format!("{}/auth/me", root_path), get(get_me))
        .route(
            &format!("{}/auth/preferences", root_path),
            put(update_preferences),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth));

    public.merge(protected)
}
