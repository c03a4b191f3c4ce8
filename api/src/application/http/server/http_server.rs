use std::sync::Arc;

use crate::application::http::authentication::router::authentication_routes;
use crate::application::http::consumption::router::consumption_routes;
use crate::application::http::dish::router::dish_routes;
use crate::application::http::health::health_routes;
use crate::application::http::ingredient::router::ingredient_routes;
use crate::application::http::recommendation::router::recommendation_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::info::get_info;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use nutritrack_core::{
    domain::common::NutritrackConfig,
    infrastructure::{
        authentication::PostgresSessionRepository,
        consumption::PostgresConsumptionLogRepository,
        db::postgres::{Postgres, PostgresConfig},
        dish::PostgresDishRepository,
        ingredient::PostgresIngredientRepository,
        oauth::GoogleOAuthClient,
        user::{PostgresUserPreferenceRepository, PostgresUserRepository},
    },
};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = NutritrackConfig::from(args.as_ref().clone());

    let postgres = Postgres::new(PostgresConfig::from(&config.database)).await?;

    let user_repository = PostgresUserRepository::new(postgres.get_db());
    let preference_repository = PostgresUserPreferenceRepository::new(postgres.get_db());
    let session_repository = PostgresSessionRepository::new(postgres.get_db());
    let ingredient_repository = PostgresIngredientRepository::new(postgres.get_db());
    let dish_repository = PostgresDishRepository::new(postgres.get_db());
    let consumption_repository = PostgresConsumptionLogRepository::new(postgres.get_db());

    let oauth_client = config.oauth.clone().map(GoogleOAuthClient::new);
    if oauth_client.is_none() {
        debug!("Google OAuth credentials absent, OAuth login disabled");
    }

    Ok(AppState::new(
        args,
        user_repository,
        preference_repository,
        session_repository,
        ingredient_repository,
        dish_repository,
        consumption_repository,
        oauth_client,
    ))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .route(&root_path, get(get_info))
        .merge(authentication_routes(state.clone()))
        .merge(ingredient_routes(state.clone()))
        .merge(dish_routes(state.clone()))
        .merge(consumption_routes(state.clone()))
        .merge(recommendation_routes(state.clone()))
        .merge(health_routes())
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use clap::Parser;
    use sea_orm::DatabaseConnection;

    // State backed by a disconnected database handle. Enough to exercise
    // routing and the auth guard; no query runs.
    fn test_state() -> AppState {
        let args = Arc::new(Args::parse_from(["nutritrack-api"]));
        let db = DatabaseConnection::default();

        AppState::new(
            args,
            PostgresUserRepository::new(db.clone()),
            PostgresUserPreferenceRepository::new(db.clone()),
            PostgresSessionRepository::new(db.clone()),
            PostgresIngredientRepository::new(db.clone()),
            PostgresDishRepository::new(db.clone()),
            PostgresConsumptionLogRepository::new(db),
            None,
        )
    }

    // The prometheus layer installs a process-global recorder, so the router
    // is built once and cloned per test.
    fn test_server() -> TestServer {
        static ROUTER: std::sync::OnceLock<Router> = std::sync::OnceLock::new();
        let router = ROUTER
            .get_or_init(|| router(test_state()).unwrap())
            .clone();
        TestServer::new(router).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let server = test_server();

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "OK");
    }

    #[tokio::test]
    async fn info_endpoint_lists_resources() {
        let server = test_server();

        let response = server.get("/api").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["endpoints"]["recommendations"], "/api/recommendations");
    }

    #[tokio::test]
    async fn user_scoped_routes_reject_missing_token() {
        let server = test_server();

        for path in [
            "/api/recommendations",
            "/api/consumption",
            "/api/ingredients",
            "/api/dishes",
            "/api/auth/me",
        ] {
            let response = server.get(path).await;
            response.assert_status_unauthorized();
        }
    }

    #[tokio::test]
    async fn invalid_token_is_rejected() {
        let server = test_server();

        let response = server
            .get("/api/recommendations")
            .authorization_bearer("not-a-token")
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn google_login_unconfigured_returns_not_implemented() {
        let server = test_server();

        let response = server.get("/api/auth/google").await;

        response.assert_status(axum::http::StatusCode::NOT_IMPLEMENTED);
    }
}
