use crate::case::Case;
use crate::report::CaseResult;
use anyhow::{bail, Result};
use lispform_compiler::{Converter, Query};
use time::OffsetDateTime;

#[derive(Debug, Default)]
pub struct CaseEvaluator {
    converter: Converter,
}

impl CaseEvaluator {
    pub fn new(converter: Converter) -> Self {
        Self { converter }
    }

    pub fn evaluate(&self, cases: impl IntoIterator<Item = Case>) -> Vec<CaseResult> {
        cases
            .into_iter()
            .map(|case| CaseResult {
                outcome: self.evaluate_case(&case),
                case: case.name,
                date: OffsetDateTime::now_utc(),
            })
            .collect()
    }

    fn evaluate_case(&self, case: &Case) -> Result<()> {
        let actual = self
            .converter
            .convert_or_sentinel(&Query::new(case.query.as_str()));
        if actual != case.expected {
            bail!(
                "Unexpected conversion of {}\nexpected: {}\nactual:   {actual}",
                case.path.display(),
                case.expected
            )
        }
        Ok(())
    }
}
