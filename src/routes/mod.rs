//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three REST routes back the image board: list, upload, and per-file
//! serving under `/images`. Everything else falls through to the built
//! client, so `/` serves its `index.html`.

pub mod images;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::{get, post};
use board::image::{IMAGES_PATH, UPLOADS_PATH};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState, config: &Config) -> Router {
    let client = ServeDir::new(&config.client_dist_dir).append_index_html_on_directories(true);

    Router::new()
        .route(IMAGES_PATH, get(images::list_images))
        .route("/images/{name}", get(images::serve_image))
        .route(
            UPLOADS_PATH,
            post(images::upload_image).layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .route("/healthz", get(healthz))
        .fallback_service(client)
        .layer(cors_layer(&config.cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    if origin == "*" {
        return cors.allow_origin(Any);
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => cors.allow_origin(value),
        Err(e) => {
            tracing::warn!(%origin, error = %e, "invalid CORS_ORIGIN; allowing any origin");
            cors.allow_origin(Any)
        }
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
