use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::*;

/// Largest accepted CSV upload
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn create_router() -> Router {
    Router::new()
        .route("/api/to-utm", get(get_to_utm))
        .route("/api/to-latlon", get(get_to_lat_lon))
        .route("/api/upload", post(upload_csv))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
                .layer(CorsLayer::permissive()),
        )
}
