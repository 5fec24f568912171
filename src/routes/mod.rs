use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::config::AppState;
use crate::handlers::{conclude_job, debug_queue, dequeue_job, enqueue_job, get_job, health_check};

/// Create API router
pub fn create_router(state: AppState) -> Router {
    // Health check route (outside /jobs)
    let health_routes = Router::new()
        .route("/health", get(health_check));

    // Job queue routes. Static segments are registered alongside the :id
    // captures; axum prefers the static match.
    let job_routes = Router::new()
        .route("/enqueue", post(enqueue_job))
        .route("/dequeue", get(dequeue_job))
        .route("/debug", get(debug_queue))
        .route("/:id", get(get_job))
        .route("/:id/conclude", patch(conclude_job));

    // Combine routes
    Router::new()
        .merge(health_routes)
        .nest("/jobs", job_routes)
        .with_state(state)
}
