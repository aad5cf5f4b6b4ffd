//! HTTP API Layer
//!
//! This crate provides the REST API for SettleFlow using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claim submission and health checks
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_adjudication::Pipeline;

use crate::config::ApiConfig;
use crate::handlers::{claims, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub config: ApiConfig,
}

/// Creates the main API router with the standard pipeline
pub fn create_router(config: ApiConfig) -> Router {
    create_router_with_pipeline(Arc::new(Pipeline::standard()), config)
}

/// Creates the API router around an explicit pipeline (used by tests to
/// inject a deterministic clock or custom steps)
pub fn create_router_with_pipeline(pipeline: Arc<Pipeline>, config: ApiConfig) -> Router {
    let state = AppState { pipeline, config };

    let public_routes = Router::new().route("/health", get(health::health_check));

    let claims_routes = Router::new().route("/adjudicate", post(claims::adjudicate_claim));

    let api_routes = Router::new().nest("/claims", claims_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
