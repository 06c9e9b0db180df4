use crate::naming::InputName;
use crate::overrides::{apply_overrides, load_overrides};
use crate::t_args;
use crate::types::{CaseMap, TestCase};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Pairs every `<name>.in.<ext>` in `dir` with its `<name>.out.<ext>`.
///
/// Only the top level of `dir` is scanned, in the order the directory listing
/// yields entries. Inputs without an output file are kept as `None`. When two
/// inputs derive the same name the later one wins. Overrides from
/// `tests.json` are applied before returning.
pub fn discover_cases(dir: &Path) -> Result<CaseMap> {
    let dir = std::path::absolute(dir)
        .with_context(|| t_args!("discovery-failed-to-list", "dir" => dir.display()))?;
    let mut cases = CaseMap::new();

    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| t_args!("discovery-failed-to-list", "dir" => dir.display()))?;
        let Some(file_name) = entry.file_name().to_str() else {
            debug!("Skipping non UTF-8 name {:?}", entry.file_name());
            continue;
        };
        let Some(input) = InputName::parse(file_name) else {
            continue;
        };

        let name = input.test_name();
        let output_file = dir.join(input.output_file_name());
        if output_file.is_file() {
            let case = TestCase::new(
                name.clone(),
                dir.clone(),
                entry.path().to_path_buf(),
                output_file,
            );
            cases.insert(name, Some(case));
        } else {
            debug!("No output file for '{name}' ({})", output_file.display());
            cases.insert(name, None);
        }
    }

    if let Some(overrides) = load_overrides(&dir)? {
        apply_overrides(&mut cases, &overrides);
    }

    Ok(cases)
}
