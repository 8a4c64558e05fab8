mod job;

pub use job::{validate_equity, validate_salary, validate_title, Job, NewJob};
