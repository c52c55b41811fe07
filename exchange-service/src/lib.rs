//! HTTP adapter for the single-instrument exchange simulator.
//!
//! Thin layer: decodes JSON bodies, forwards each request to the shared
//! order book and encodes the result. Routes:
//! - `POST /init`, `POST /limit_order`, `POST /cancel_order`, `POST /market_order`
//! - `GET /get_data`, `GET /health`

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};

pub mod config;
pub mod error;
pub mod exchange;
pub mod handlers;
pub mod layers;
pub mod types;

use exchange::Exchange;
use layers::{MakeRequestUuid, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub exchange: Arc<Exchange>,
}

/// Builds the router with all routes and middleware attached.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/init", post(handlers::init))
        .route("/limit_order", post(handlers::limit_order))
        .route("/cancel_order", post(handlers::cancel_order))
        .route("/market_order", post(handlers::market_order))
        .route("/get_data", get(handlers::get_data))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(layers::trace())
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
