use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Maximum length of a company handle (matches the `companies.handle` column)
pub const MAX_HANDLE_LENGTH: usize = 25;

/// Validated company handle referenced by a job
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyHandle(String);

impl CompanyHandle {
    pub fn new(handle: String) -> Result<Self, DomainError> {
        if handle.trim().is_empty() || handle.chars().count() > MAX_HANDLE_LENGTH {
            return Err(DomainError::InvalidCompanyHandle(handle));
        }
        Ok(Self(handle))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CompanyHandle {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CompanyHandle> for String {
    fn from(handle: CompanyHandle) -> Self {
        handle.0
    }
}

impl std::fmt::Display for CompanyHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
