use indexmap::IndexMap;
use serde_json::Value;
use std::path::PathBuf;

/// One input/expected-output file pair discovered in a test directory.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,
    pub dir: PathBuf,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    /// Passed to the command as `-d <json>`; `tests.json` may replace it.
    pub data: Value,
}

impl TestCase {
    pub fn new(name: String, dir: PathBuf, input_file: PathBuf, output_file: PathBuf) -> Self {
        Self {
            name,
            dir,
            input_file,
            output_file,
            data: Value::Object(Default::default()),
        }
    }
}

/// Cases in discovery order. `None` marks an input file without an output file.
pub type CaseMap = IndexMap<String, Option<TestCase>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
    NoOutputFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub name: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub total: usize,   // Cases that were run (missing output files excluded)
    pub passed: usize,  // Cases whose output matched
    pub failed: usize,  // Cases whose output did not match
    pub missing: usize, // Input files with no output file
    pub cases: Vec<CaseResult>,
}

impl Summary {
    pub fn record(&mut self, name: &str, outcome: Outcome) {
        match outcome {
            Outcome::Success => {
                self.total += 1;
                self.passed += 1;
            }
            Outcome::Failure => {
                self.total += 1;
                self.failed += 1;
            }
            Outcome::NoOutputFile => self.missing += 1,
        }
        self.cases.push(CaseResult {
            name: name.to_string(),
            outcome,
        });
    }

    /// Vacuously true when nothing was run.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}
