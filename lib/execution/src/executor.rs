use crate::{ExecutionConfig, ExecutionError};
use async_trait::async_trait;
use tracing::{trace, warn};

/// Runs query text against a knowledge base and returns the answers as plain strings.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Executes `query_text` and returns its answers.
    async fn execute(&self, query_text: &str) -> Result<Vec<String>, ExecutionError>;
}

/// Turns a rendered logical form back into query text that a [QueryExecutor] understands.
pub trait InverseCompiler: Send + Sync {
    fn to_query_text(&self, expression: &str) -> Result<String, ExecutionError>;
}

/// Executes `expression` and returns its answers.
///
/// The execution is abandoned once `config.timeout` has elapsed. Any failure, including a timeout
/// or an expression that cannot be compiled back into a query, is logged and yields an empty
/// answer set. This function never fails.
pub async fn execute_expression(
    executor: &dyn QueryExecutor,
    inverse: &dyn InverseCompiler,
    expression: &str,
    config: &ExecutionConfig,
) -> Vec<String> {
    match try_execute(executor, inverse, expression, config).await {
        Ok(answers) => {
            trace!("{expression} yielded {} answer(s)", answers.len());
            answers
        }
        Err(error) => {
            warn!("Could not execute {expression}: {error}");
            Vec::new()
        }
    }
}

async fn try_execute(
    executor: &dyn QueryExecutor,
    inverse: &dyn InverseCompiler,
    expression: &str,
    config: &ExecutionConfig,
) -> Result<Vec<String>, ExecutionError> {
    let query_text = inverse.to_query_text(expression)?;
    tokio::time::timeout(config.timeout, executor.execute(&query_text))
        .await
        .map_err(|_| ExecutionError::Timeout(config.timeout))?
}
