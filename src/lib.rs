//! Candado Server Library
//!
//! Exposes the router and core modules so integration tests can drive the
//! full HTTP surface. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `pdf`: PDF inspection and password removal via lopdf
//! - `routes`: HTTP handlers, multipart decoding, response shaping
//! - `error`: application error taxonomy and HTTP status mapping
//! - `config`: environment-driven configuration

pub mod config;
pub mod error;
pub mod pdf;
pub mod routes;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;

/// Build the application router with all routes and middleware.
pub fn app(config: &Config) -> Router {
    // Permissive CORS: the service is called directly from mobile and web
    // clients on arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::pdf::router(config.limits.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
