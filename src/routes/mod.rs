//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the `/animals` endpoints and a health probe under a single Axum
//! router. Every request and response is logged at INFO through the trace
//! layer.

pub mod animals;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
        .on_failure(DefaultOnFailure::new().level(Level::ERROR));

    Router::new()
        .route("/animals", get(animals::list_animals))
        .route("/animals/", get(animals::list_animals))
        // One param name per segment position: matchit rejects mixed names.
        .route("/animals/{key}", get(animals::list_by_movement_type))
        .route("/animals/{key}/add", post(animals::add_animal))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(trace)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
