//! # Jobly - Job Postings Service
//!
//! REST CRUD for job postings on top of PostgreSQL, built on Clean
//! Architecture principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Job entity, value objects, domain errors
//! - **Application**: Use cases and ports (interfaces)
//! - **Infrastructure**: SQL fragment builders and Postgres adapters
//! - **API**: HTTP handlers and middleware
//!
//! ## Key Features
//!
//! - Partial updates built from only the fields a client sends
//! - Filtered listing (`minSalary`, `hasEquity`, `title`)
//! - Referential checks before inserts
//! - Admin-only writes guarded by JWT
//!
//! ## Example Usage
//!
//! ```
//! use jobly::infrastructure::persistence::{QueryBuilder, SqlValue, UpdateColumns};
//!
//! let fields = [("title", SqlValue::from("new title")), ("salary", SqlValue::from(1000))];
//! let set = QueryBuilder::partial_update(&fields, &UpdateColumns::new()).unwrap();
//! assert_eq!(set.clause, r#""title"=$1, "salary"=$2"#);
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
