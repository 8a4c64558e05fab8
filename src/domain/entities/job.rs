use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{CompanyHandle, JobId};

/// A job posting as stored in the `jobs` table.
///
/// `equity` is kept as the decimal text rendered by the database so that
/// values such as `0.050` survive without float rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    id: JobId,
    title: String,
    salary: Option<i32>,
    equity: Option<String>,
    company_handle: CompanyHandle,
}

impl Job {
    /// Reconstruct from a database row (used by repository)
    pub fn reconstruct(
        id: JobId,
        title: String,
        salary: Option<i32>,
        equity: Option<String>,
        company_handle: CompanyHandle,
    ) -> Self {
        Self {
            id,
            title,
            salary,
            equity,
            company_handle,
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn salary(&self) -> Option<i32> {
        self.salary
    }

    pub fn equity(&self) -> Option<&str> {
        self.equity.as_deref()
    }

    pub fn company_handle(&self) -> &CompanyHandle {
        &self.company_handle
    }
}

/// A job that has passed domain validation but has no id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    title: String,
    salary: Option<i32>,
    equity: Option<f64>,
    company_handle: CompanyHandle,
}

impl NewJob {
    pub fn new(
        title: String,
        salary: Option<i32>,
        equity: Option<f64>,
        company_handle: CompanyHandle,
    ) -> Result<Self, DomainError> {
        validate_title(&title)?;
        if let Some(salary) = salary {
            validate_salary(salary)?;
        }
        if let Some(equity) = equity {
            validate_equity(equity)?;
        }

        Ok(Self {
            title,
            salary,
            equity,
            company_handle,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn salary(&self) -> Option<i32> {
        self.salary
    }

    pub fn equity(&self) -> Option<f64> {
        self.equity
    }

    pub fn company_handle(&self) -> &CompanyHandle {
        &self.company_handle
    }
}

pub fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidTitle(title.to_string()));
    }
    Ok(())
}

pub fn validate_salary(salary: i32) -> Result<(), DomainError> {
    if salary < 0 {
        return Err(DomainError::InvalidSalary(salary));
    }
    Ok(())
}

pub fn validate_equity(equity: f64) -> Result<(), DomainError> {
    if !(0.0..=1.0).contains(&equity) {
        return Err(DomainError::InvalidEquity(equity));
    }
    Ok(())
}
