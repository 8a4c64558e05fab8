use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::middleware::validation::validate_and_respond;
use crate::application::dto::{
    CreateJobRequest, JobFilterRequest, JobListResponse, JobResponse, UpdateJobRequest,
};
use crate::application::use_cases::{
    CreateJobUseCase, DeleteJobUseCase, GetJobUseCase, ListJobsUseCase, UpdateJobUseCase,
};
use crate::domain::value_objects::JobId;

fn parse_job_id(id: &str) -> Result<JobId, ApiError> {
    id.parse::<JobId>()
        .map_err(|e| ApiError::bad_request(e.to_string()))
}

fn not_found(id: JobId) -> ApiError {
    ApiError::not_found(format!("No job: {}", id))
}

/// POST /jobs
/// Create a job for an existing company (admin only)
#[utoipa::path(
    post,
    path = "/jobs",
    tag = "jobs",
    request_body = CreateJobRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Job created", body = JobResponse),
        (status = 400, description = "Invalid body or unknown company"),
        (status = 401, description = "Admin token required")
    )
)]
pub async fn create_job_handler(
    State(use_case): State<Arc<CreateJobUseCase>>,
    payload: Result<Json<CreateJobRequest>, JsonRejection>,
) -> Result<Json<JobResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    validate_and_respond(&request)?;

    let job = use_case.execute(request).await?;

    Ok(Json(JobResponse { job }))
}

/// GET /jobs
/// List jobs ordered by title, filtered by the query string
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "jobs",
    params(JobFilterRequest),
    responses(
        (status = 200, description = "Matching jobs", body = JobListResponse),
        (status = 400, description = "Unknown or malformed filter")
    )
)]
pub async fn list_jobs_handler(
    State(use_case): State<Arc<ListJobsUseCase>>,
    filter: Result<Query<JobFilterRequest>, QueryRejection>,
) -> Result<Json<JobListResponse>, ApiError> {
    let Query(filter) = filter.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let jobs = use_case.execute(&filter).await?;

    Ok(Json(JobListResponse { jobs }))
}

/// GET /jobs/{id}
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "Job found", body = JobResponse),
        (status = 400, description = "Invalid job id"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn get_job_handler(
    State(use_case): State<Arc<GetJobUseCase>>,
    Path(id): Path<String>,
) -> Result<Json<JobResponse>, ApiError> {
    let id = parse_job_id(&id)?;

    let job = use_case.execute(id).await?;

    Ok(Json(JobResponse { job }))
}

/// PATCH /jobs/{id}
/// Update title, salary or equity (admin only)
#[utoipa::path(
    patch,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    request_body = UpdateJobRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Job updated", body = JobResponse),
        (status = 400, description = "Invalid body or job id"),
        (status = 401, description = "Admin token required"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn update_job_handler(
    State(use_case): State<Arc<UpdateJobUseCase>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateJobRequest>, JsonRejection>,
) -> Result<Json<JobResponse>, ApiError> {
    let id = parse_job_id(&id)?;
    let Json(changes) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let job = use_case
        .execute(id, changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(JobResponse { job }))
}

/// DELETE /jobs/{id}
/// Delete a job (admin only)
#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 400, description = "Invalid job id"),
        (status = 401, description = "Admin token required"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn delete_job_handler(
    State(use_case): State<Arc<DeleteJobUseCase>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_job_id(&id)?;

    use_case.execute(id).await?.ok_or_else(|| not_found(id))?;

    Ok(StatusCode::NO_CONTENT)
}
