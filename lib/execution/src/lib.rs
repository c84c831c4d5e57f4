//! Executes logical forms against a knowledge base and validates them against gold answers.
//!
//! The knowledge base itself is not part of this crate. It is reached through a
//! [QueryExecutor], and a rendered logical form is turned back into query text by an
//! [InverseCompiler]. Every execution is bounded by [ExecutionConfig::timeout]; failures never
//! propagate and are reported as an empty answer set instead.

mod config;
mod error;
mod executor;
mod validation;

pub use config::{ExecutionConfig, DEFAULT_EXECUTION_TIMEOUT};
pub use error::ExecutionError;
pub use executor::{execute_expression, InverseCompiler, QueryExecutor};
pub use validation::{AnswerValidator, ValidationRecord, ValidationReport};
