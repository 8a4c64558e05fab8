use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::application::dto::{
    CreateJobRequest, JobDto, JobFilterRequest, JobListResponse, JobResponse, UpdateJobRequest,
};

/// OpenAPI specification for the Jobly API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jobly API",
        version = "1.0.0",
        description = "Job postings with partial updates and filtered listing"
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::jobs::create_job_handler,
        crate::api::handlers::jobs::list_jobs_handler,
        crate::api::handlers::jobs::get_job_handler,
        crate::api::handlers::jobs::update_job_handler,
        crate::api::handlers::jobs::delete_job_handler,
    ),
    components(
        schemas(
            JobDto,
            JobResponse,
            JobListResponse,
            CreateJobRequest,
            UpdateJobRequest,
            JobFilterRequest,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "jobs", description = "Job postings")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` JWT scheme referenced by admin routes
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
