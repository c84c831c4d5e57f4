use crate::executor::execute_expression;
use crate::{ExecutionConfig, InverseCompiler, QueryExecutor};
use std::collections::HashSet;
use tracing::{debug, info};

/// A converted query together with the answers its question is known to have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRecord {
    pub id: String,
    /// The rendered logical form, possibly the sentinel.
    pub expression: String,
    pub gold_answers: Vec<String>,
}

/// The records of a batch whose logical forms reproduce their gold answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub kept: Vec<ValidationRecord>,
    pub total: usize,
}

impl ValidationReport {
    /// Returns the share of records that survived validation, or zero for an empty batch.
    #[allow(
        clippy::cast_precision_loss,
        reason = "Batches are far smaller than 2^52 records"
    )]
    pub fn remaining_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.kept.len() as f64 / self.total as f64
    }
}

/// Checks logical forms by executing them and comparing their answers with known gold answers.
pub struct AnswerValidator<E, I> {
    executor: E,
    inverse: I,
    config: ExecutionConfig,
    sentinel: String,
}

impl<E: QueryExecutor, I: InverseCompiler> AnswerValidator<E, I> {
    pub fn new(
        executor: E,
        inverse: I,
        config: ExecutionConfig,
        sentinel: impl Into<String>,
    ) -> Self {
        Self {
            executor,
            inverse,
            config,
            sentinel: sentinel.into(),
        }
    }

    /// Returns whether executing `expression` yields exactly the set of `gold_answers`.
    ///
    /// Answer order and duplicates are ignored. The sentinel is never valid and is not executed.
    pub async fn validate(&self, expression: &str, gold_answers: &[String]) -> bool {
        if expression == self.sentinel {
            return false;
        }

        let answers =
            execute_expression(&self.executor, &self.inverse, expression, &self.config).await;
        let actual = answers.iter().map(String::as_str).collect::<HashSet<_>>();
        let expected = gold_answers
            .iter()
            .map(String::as_str)
            .collect::<HashSet<_>>();
        actual == expected
    }

    /// Keeps the records of `records` whose logical forms validate.
    ///
    /// Records are executed one after another and keep their relative order.
    pub async fn filter_batch(&self, records: Vec<ValidationRecord>) -> ValidationReport {
        let total = records.len();
        let mut kept = Vec::with_capacity(total);
        for record in records {
            if self.validate(&record.expression, &record.gold_answers).await {
                kept.push(record);
            } else {
                debug!("Dropping {} after validation", record.id);
            }
        }

        let report = ValidationReport { kept, total };
        info!(
            "Kept {} of {} records ({:.4})",
            report.kept.len(),
            report.total,
            report.remaining_rate()
        );
        report
    }
}
