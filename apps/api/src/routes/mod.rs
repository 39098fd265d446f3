pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advice::handlers as advice_handlers;
use crate::state::AppState;
use crate::upload::handlers as upload_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/upload", post(upload_handlers::handle_upload))
        .route(
            "/api/resume-suggestions",
            post(advice_handlers::handle_resume_suggestions),
        )
        .route(
            "/api/job-description-analysis",
            post(advice_handlers::handle_job_description_analysis),
        )
        .route(
            "/api/resume-optimization-tips",
            post(advice_handlers::handle_optimization_tips),
        )
        .route(
            "/api/interview-preparation",
            post(advice_handlers::handle_interview_preparation),
        )
        .route(
            "/api/career-advice",
            post(advice_handlers::handle_career_advice),
        )
        .route(
            "/api/generate-optimized-resume",
            post(advice_handlers::handle_generate_optimized_resume),
        )
        .with_state(state)
}
