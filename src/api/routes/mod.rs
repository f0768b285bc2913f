pub mod chat;
pub mod consult;
pub mod health;
pub mod hospitals;
pub mod image;

use axum::{routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::middleware::request_logger;
use crate::api::state::AppState;

pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: every endpoint is called from browser frontends on
    // other origins, and the CORS layer also answers OPTIONS preflights.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/chat", post(chat::chat_handler))
        .route("/api/analyze-image", post(image::analyze_image))
        .route("/api/medication-advice", post(consult::medication_advice))
        .route("/api/find-specialist", post(consult::find_specialist))
        .route("/api/find-hospitals", post(hospitals::find_hospitals))
        .layer(axum::middleware::from_fn(request_logger))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
