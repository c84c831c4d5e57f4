use std::time::Duration;

/// An error raised while executing a logical form against a knowledge base.
///
/// None of these errors leave [execute_expression](crate::execute_expression); they are logged
/// and turned into an empty answer set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ExecutionError {
    /// The endpoint did not answer within the configured time.
    #[error("Query execution timed out after {0:?}")]
    Timeout(Duration),
    /// The endpoint rejected the query or could not be reached.
    #[error("Endpoint error: {0}")]
    Endpoint(String),
    /// The logical form could not be turned back into a query.
    #[error("Inverse compilation failed: {0}")]
    InverseCompilation(String),
}
