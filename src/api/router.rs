use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{
    create_job_handler, delete_job_handler, get_job_handler, health_handler, list_jobs_handler,
    readiness_handler, update_job_handler,
};
use crate::api::middleware::{auth, cors, metrics};
use crate::api::openapi::swagger_ui;
use crate::application::use_cases::{
    CreateJobUseCase, DeleteJobUseCase, GetJobUseCase, ListJobsUseCase, UpdateJobUseCase,
};
use crate::config::Config;

/// Application state container
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub create_job_use_case: Arc<CreateJobUseCase>,
    pub get_job_use_case: Arc<GetJobUseCase>,
    pub list_jobs_use_case: Arc<ListJobsUseCase>,
    pub update_job_use_case: Arc<UpdateJobUseCase>,
    pub delete_job_use_case: Arc<DeleteJobUseCase>,
    pub token_keys: Arc<auth::TokenKeys>,
    pub config: Config,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let admin_only =
        axum_middleware::from_fn_with_state(Arc::clone(&state.token_keys), auth::ensure_admin);

    Router::new()
        // Health check (no auth required)
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.pool)),
        )
        // Jobs: reads are public, writes need an admin token
        .route(
            "/jobs",
            post(create_job_handler)
                .with_state(Arc::clone(&state.create_job_use_case))
                .route_layer(admin_only.clone()),
        )
        .route(
            "/jobs",
            get(list_jobs_handler).with_state(Arc::clone(&state.list_jobs_use_case)),
        )
        .route(
            "/jobs/{id}",
            get(get_job_handler).with_state(Arc::clone(&state.get_job_use_case)),
        )
        .route(
            "/jobs/{id}",
            patch(update_job_handler)
                .with_state(Arc::clone(&state.update_job_use_case))
                .route_layer(admin_only.clone()),
        )
        .route(
            "/jobs/{id}",
            delete(delete_job_handler)
                .with_state(Arc::clone(&state.delete_job_use_case))
                .route_layer(admin_only),
        )
        .merge(swagger_ui())
        .layer(RequestBodyLimitLayer::new(state.config.max_body_bytes))
        .layer(cors::create_cors_layer(&state.config.allowed_origins))
        .layer(axum_middleware::from_fn(metrics::metrics_middleware))
}
