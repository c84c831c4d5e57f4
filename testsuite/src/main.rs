#![allow(clippy::print_stdout, reason = "The report is written to stdout")]
use anyhow::Result;
use clap::Parser;
use lispform_testsuite::case::load_cases;
use lispform_testsuite::evaluator::CaseEvaluator;
use lispform_testsuite::report::build_report;
use std::path::PathBuf;

#[derive(Parser)]
/// Logical form compiler conformance runner
struct Args {
    /// Directories containing the cases to run
    directory: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let matches = Args::parse();

    let evaluator = CaseEvaluator::default();
    let mut results = Vec::new();
    for directory in &matches.directory {
        results.extend(evaluator.evaluate(load_cases(directory)?));
    }
    print!("{}", build_report(results));
    Ok(())
}
