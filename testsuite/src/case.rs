use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

const QUERY_EXTENSION: &str = "rq";
const EXPECTED_EXTENSION: &str = "lf";

/// A query together with its expected conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    pub path: PathBuf,
    pub query: String,
    /// The expected logical form, or the sentinel.
    pub expected: String,
}

/// Loads all cases of `directory`, sorted by name.
pub fn load_cases(directory: &Path) -> Result<Vec<Case>> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("Failed to list {}", directory.display()))?;

    let mut cases = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(OsStr::to_str) != Some(QUERY_EXTENSION) {
            continue;
        }
        cases.push(load_case(path)?);
    }
    cases.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(cases)
}

fn load_case(path: PathBuf) -> Result<Case> {
    let name = path
        .file_stem()
        .and_then(OsStr::to_str)
        .with_context(|| format!("{} has no valid name", path.display()))?
        .to_owned();
    let query =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let expected_path = path.with_extension(EXPECTED_EXTENSION);
    let expected = fs::read_to_string(&expected_path)
        .with_context(|| format!("Failed to read {}", expected_path.display()))?
        .trim()
        .to_owned();
    Ok(Case {
        name,
        path,
        query,
        expected,
    })
}
