//! HTTP API surface, nested under `/api/v1`.

mod budgets;
mod dto;
mod insights;
mod transactions;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::main_lib::AppState;

/// Builds the application router with tracing and CORS attached.
pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) if config.cors_origin != "*" => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(origin))
            .allow_methods(Any)
            .allow_headers(Any),
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let api = Router::new()
        .merge(transactions::router())
        .merge(budgets::router())
        .merge(insights::router());

    Router::new()
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
