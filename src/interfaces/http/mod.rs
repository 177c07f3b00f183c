//! HTTP adapter exposing the encoder as `POST /api/generate-qr`.

pub mod dto;
pub mod error;
pub mod handlers;

use crate::application::encoder::PaymentStringEncoder;
use crate::domain::ports::ClockRef;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::post;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub const GENERATE_QR_PATH: &str = "/api/generate-qr";

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub encoder: Arc<PaymentStringEncoder>,
}

impl AppState {
    pub fn new(clock: ClockRef) -> Self {
        Self {
            encoder: Arc::new(PaymentStringEncoder::new(clock)),
        }
    }
}

pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Builds the router with permissive CORS on every response.
///
/// `CorsLayer` answers preflights itself but only lists the allowed methods
/// and headers there, so they are also stamped onto every other response.
pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            GENERATE_QR_PATH,
            post(handlers::generate_qr).fallback(handlers::method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
