use anyhow::Result;
use std::fmt::Write;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Debug)]
pub struct CaseResult {
    pub case: String,
    pub outcome: Result<()>,
    pub date: OffsetDateTime,
}

/// Renders one line per case followed by a summary line.
pub fn build_report(results: impl IntoIterator<Item = CaseResult>) -> String {
    let mut buffer = String::new();
    let mut passed = 0;
    let mut total = 0;
    for result in results {
        total += 1;
        let date = result
            .date
            .format(&Rfc3339)
            .unwrap_or_else(|_| result.date.to_string());
        match &result.outcome {
            Ok(()) => {
                passed += 1;
                writeln!(buffer, "{date}\t{}\tpassed", result.case).ok();
            }
            Err(error) => {
                writeln!(
                    buffer,
                    "{date}\t{}\tfailed\t{}",
                    result.case,
                    error.to_string().replace('\n', " ")
                )
                .ok();
            }
        }
    }
    writeln!(buffer, "{passed} of {total} cases passed").ok();
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_report_lists_every_case() {
        let date = OffsetDateTime::UNIX_EPOCH;
        let report = build_report([
            CaseResult {
                case: "chain".to_owned(),
                outcome: Ok(()),
                date,
            },
            CaseResult {
                case: "range".to_owned(),
                outcome: Err(anyhow!("expected: a\nactual: b")),
                date,
            },
        ]);
        assert_eq!(
            report,
            "1970-01-01T00:00:00Z\tchain\tpassed\n1970-01-01T00:00:00Z\trange\tfailed\texpected: a actual: b\n1 of 2 cases passed\n"
        );
    }
}
