//! Conformance cases for the logical form compiler.
//!
//! A case is a `<name>.rq` file holding a query next to a `<name>.lf` file holding the expected
//! logical form, or the sentinel if the query must be rejected.

pub mod case;
pub mod evaluator;
pub mod report;

use crate::case::load_cases;
use crate::evaluator::CaseEvaluator;
use anyhow::Result;
use std::path::Path;

#[allow(clippy::panic_in_result_fn, reason = "Used as the body of tests")]
pub fn check_testsuite(directory: impl AsRef<Path>, ignored_cases: &[&str]) -> Result<()> {
    let cases = load_cases(directory.as_ref())?;
    let results = CaseEvaluator::default().evaluate(cases);
    let case_count = results.len();

    let mut errors = Vec::default();
    for result in results {
        if let Err(error) = &result.outcome {
            if !ignored_cases.contains(&result.case.as_str()) {
                errors.push(format!("{}: failed with error {error:#}", result.case));
            }
        }
    }

    assert!(case_count > 0, "No case found");
    assert!(
        errors.is_empty(),
        "{} cases failing from {} cases:\n{}\n",
        errors.len(),
        case_count,
        errors.join("\n")
    );
    Ok(())
}
