use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{AppState, inspector_handlers, job_handlers};

/// Build the full API router with tracing and CORS applied.
pub fn create_api_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/inspectors",
            post(inspector_handlers::create_inspector_handler)
                .get(inspector_handlers::list_inspectors_handler),
        )
        .route(
            "/inspectors/{id}",
            patch(inspector_handlers::update_inspector_handler)
                .delete(inspector_handlers::delete_inspector_handler),
        )
        .route(
            "/jobs",
            post(job_handlers::create_job_handler)
                .get(job_handlers::list_jobs_handler),
        )
        .route(
            "/jobs/{id}",
            get(job_handlers::get_job_handler)
                .put(job_handlers::update_job_handler)
                .delete(job_handlers::delete_job_handler),
        )
        .route("/jobs/{id}/assign", post(job_handlers::assign_job_handler))
        .route(
            "/jobs/{id}/complete",
            post(job_handlers::complete_job_handler),
        );

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
