use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::handlers::analytics_handlers::{get_correlation, get_trend};
use crate::handlers::reference_handlers::{get_skills, get_time};
use crate::handlers::survey_handlers::{get_interests, get_mood, get_ratings};
use crate::sheets::SheetsClient;

pub fn create_router(sheets: SheetsClient, config: &Config) -> Router {
    let cors = create_cors_layer(config);

    Router::new()
        .route("/api/interests", get(get_interests))
        .route("/api/ratings", get(get_ratings))
        .route("/api/correlation", get(get_correlation))
        .route("/api/mood", get(get_mood))
        .route("/api/skills", get(get_skills))
        .route("/api/time", get(get_time))
        .route("/api/trend", get(get_trend))
        .with_state(sheets)
        .layer(cors)
}

fn create_cors_layer(config: &Config) -> CorsLayer {
    let origins = [config.frontend_url.parse::<HeaderValue>().unwrap()];

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE])
}
