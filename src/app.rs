use crate::docs::openapi::ApiDoc;
use crate::service::Service;
use crate::{
    handlers,
    middleware::{metrics::record_metrics, trace_root::trace_root},
};
use axum::{middleware::from_fn, routing::get, Router};

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

fn todo_routes() -> OpenApiRouter<Service> {
    OpenApiRouter::new()
        .route(
            "/todos",
            get(handlers::todo::get_all).post(handlers::todo::add),
        )
        .route(
            "/todos/{id}",
            get(handlers::todo::get)
                .put(handlers::todo::update)
                .delete(handlers::todo::delete),
        )
}

/// Browsers may call the API from any origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[instrument(name = "build_app", skip_all)]
pub fn build_app(service: Service) -> Router {
    let app_router = OpenApiRouter::new()
        .merge(todo_routes())
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer())
                .layer(from_fn(trace_root))
                .layer(from_fn(record_metrics)),
        )
        .with_state(service);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(app_router)
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
