use crate::report::{render_case_start, render_header, render_outcome, render_summary};
use crate::runner::{Runner, test_case};
use crate::types::{CaseMap, Outcome, Summary};
use anyhow::Result;
use std::io::Write;

/// Runs every case in order, one at a time, printing progress to `out`.
pub fn run_cases<R: Runner + ?Sized, W: Write>(
    runner: &R,
    cases: &CaseMap,
    out: &mut W,
) -> Result<Summary> {
    writeln!(out, "{}", render_header(cases.len()))?;

    let mut summary = Summary::default();
    for (name, case) in cases {
        write!(out, "{}", render_case_start(name))?;
        out.flush()?;

        let outcome = match case {
            None => Outcome::NoOutputFile,
            Some(case) => {
                if test_case(runner, case)? {
                    Outcome::Success
                } else {
                    Outcome::Failure
                }
            }
        };
        writeln!(out, "{}", render_outcome(outcome))?;
        summary.record(name, outcome);
    }

    writeln!(out, "{}", render_summary(&summary))?;
    Ok(summary)
}
