use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::entities::Job;

/// DTO for job responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    /// Decimal rendered as text, e.g. `"0.05"`
    pub equity: Option<String>,
    pub company_handle: String,
}

impl From<Job> for JobDto {
    fn from(job: Job) -> Self {
        Self {
            id: job.id().as_i32(),
            title: job.title().to_string(),
            salary: job.salary(),
            equity: job.equity().map(|e| e.to_string()),
            company_handle: job.company_handle().to_string(),
        }
    }
}

/// `{ "job": ... }` envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobResponse {
    pub job: JobDto,
}

/// `{ "jobs": [...] }` envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobListResponse {
    pub jobs: Vec<JobDto>,
}

/// DTO for job creation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(range(min = 0, message = "salary must not be negative"))]
    pub salary: Option<i32>,
    #[validate(range(min = 0.0, max = 1.0, message = "equity must be between 0 and 1"))]
    pub equity: Option<f64>,
    #[validate(length(
        min = 1,
        max = 25,
        message = "companyHandle must be 1 to 25 characters"
    ))]
    pub company_handle: String,
}

/// DTO for partial job updates.
///
/// Absent fields are left untouched. `salary` and `equity` accept an explicit
/// `null` to clear the column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateJobRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i32>)]
    pub salary: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<f64>)]
    pub equity: Option<Option<f64>>,
}

impl UpdateJobRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.salary.is_none() && self.equity.is_none()
    }
}

/// Query-string filters for listing jobs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct JobFilterRequest {
    /// Only jobs paying strictly more than this
    pub min_salary: Option<i32>,
    /// `true`: equity above zero; `false`: equity exactly zero
    pub has_equity: Option<bool>,
    /// Matched with SQL `LIKE`; include `%` for substring matches
    pub title: Option<String>,
}

impl JobFilterRequest {
    pub fn is_empty(&self) -> bool {
        self.min_salary.is_none() && self.has_equity.is_none() && self.title.is_none()
    }
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`)
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
