use crate::t_args;
use crate::types::CaseMap;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Sidecar file holding per-test overrides, looked up in the test directory.
pub const TESTS_JSON: &str = "tests.json";

/// Top-level `tests.json` object: display name -> override entry.
pub type Overrides = IndexMap<String, Value>;

/// Reads `tests.json` from `dir`. A missing file is not an error.
pub fn load_overrides(dir: &Path) -> Result<Option<Overrides>> {
    let file = dir.join(TESTS_JSON);
    let content = match fs::read_to_string(&file) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No {} in {}", TESTS_JSON, dir.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| t_args!("overrides-failed-to-read", "file" => file.display()));
        }
    };
    let overrides: Overrides = serde_json::from_str(&content)
        .with_context(|| t_args!("overrides-json-error", "file" => file.display()))?;
    Ok(Some(overrides))
}

/// Replaces the data payload of every discovered case named in `overrides`.
///
/// Entries are applied only when they are objects with a `data` field; the
/// value is taken verbatim, `null` included. Unknown names and cases without
/// an output file are left alone.
pub fn apply_overrides(cases: &mut CaseMap, overrides: &Overrides) {
    for (name, entry) in overrides {
        let Some(Some(case)) = cases.get_mut(name) else {
            debug!("Override for '{name}' matches no runnable case");
            continue;
        };
        match entry.get("data") {
            Some(data) => {
                debug!("Override for '{name}': data = {data}");
                case.data = data.clone();
            }
            None => debug!("Override for '{name}' has no data field"),
        }
    }
}
