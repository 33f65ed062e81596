pub mod blog;
pub mod catalog;
pub mod contact;
pub mod health;
pub mod items;
pub mod metrics;
pub mod quote;
pub mod search;
pub mod sitemap;
pub mod tents;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub type ApiError = (StatusCode, Json<Value>);

/// Log and hide a service-layer failure.
pub fn internal_error(e: anyhow::Error) -> ApiError {
    tracing::error!("request failed: {e:#}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
}

pub fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

pub fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

/// The full public API with CORS and request tracing.
pub fn router(state: AppState) -> Router {
    // Allow the site origin; localhost is always allowed for development.
    let site = state.config.site_base_url.clone();
    let cors_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _| {
        let o = match origin.to_str() {
            Ok(s) => s,
            Err(_) => return false,
        };
        o.starts_with("http://localhost") || o.starts_with("http://127.0.0.1") || o == site
    });

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_origin(cors_origin);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/sitemap.xml", get(sitemap::sitemap_xml))
        // Tents
        .route("/tent-types", get(tents::list_tent_types))
        .route("/tents", get(tents::list_tents))
        .route("/tents/{slug}", get(tents::get_tent))
        // Services, projects, reviews
        .route("/services", get(catalog::list_services))
        .route("/services/{slug}", get(catalog::get_service))
        .route("/projects", get(catalog::list_projects))
        .route("/projects/{slug}", get(catalog::get_project))
        .route("/reviews", get(catalog::list_reviews))
        // Blog
        .route("/blog", get(blog::list_posts))
        .route("/blog/latest", get(blog::latest_posts))
        .route("/blog/related/{id}", get(blog::related_posts))
        .route("/blog/{slug}", get(blog::get_post))
        // Search & listing
        .route("/search", get(search::search))
        .route("/items", get(items::list_items))
        // Leads
        .route("/contact", post(contact::submit_contact))
        .route("/contact/channels", get(contact::channels))
        .route("/quote", post(quote::compose_quote))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
