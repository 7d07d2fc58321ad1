//! API route definitions

use axum::routing::get;
use axum::Router;

use super::handlers;
use super::handlers::AppState;

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Raw speech listing
        .route("/speeches", get(handlers::list_speeches))
        // Analytics
        .route("/summaries/daily", get(handlers::daily_summaries))
        .route("/reports/monthly", get(handlers::monthly_report))
        .with_state(state)
}
