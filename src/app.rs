use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::middleware::http_logger::http_logger;
use crate::routes;
use crate::state::AppState;
use axum::Router;
use axum::middleware;
use http::header;
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::{
    ServiceBuilderExt,
    cors::{AllowOrigin, Any, CorsLayer},
    propagate_header::PropagateHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_app(db: DatabaseConnection, config: &Config) -> Router {
    let state = AppState::new(db, config.app_env.clone());

    let mut router = Router::new()
        .merge(routes::health::route::create_route())
        .merge(routes::students::create_route())
        .merge(routes::subjects::create_route());

    if config.swagger_enabled {
        let swagger_ui =
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());
        router = router.merge(swagger_ui);
    }

    // from_fn middleware is an axum layer, so it goes on the router rather than
    // in the tower ServiceBuilder below
    let router = router
        .layer(middleware::from_fn_with_state(state.clone(), http_logger))
        .with_state(state);

    let middleware = ServiceBuilder::new()
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(PropagateHeaderLayer::new(header::HeaderName::from_static(
            "x-request-id",
        )))
        .compression();

    router.layer(middleware)
}

/// Browsers may only call GET, POST, PUT and DELETE with a Content-Type header,
/// from the configured origins.
fn cors_layer(allowed_origins: &str) -> CorsLayer {
    let allowed_methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
    ];

    let cors_layer = CorsLayer::new()
        .allow_methods(allowed_methods)
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.trim() == "*" {
        return cors_layer.allow_origin(Any);
    }

    let origins: Vec<http::HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    cors_layer.allow_origin(AllowOrigin::list(origins))
}
