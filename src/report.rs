use crate::types::{CaseMap, Outcome, Summary};
use crate::{t, t_args};
use colored::{ColoredString, Colorize};

/// Named display styles for case outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Failure,
    Missing,
}

impl Style {
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Style::Success => text.bright_green(),
            Style::Failure => text.bright_red(),
            Style::Missing => text.bright_yellow(),
        }
    }
}

impl From<Outcome> for Style {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Style::Success,
            Outcome::Failure => Style::Failure,
            Outcome::NoOutputFile => Style::Missing,
        }
    }
}

pub fn render_header(count: usize) -> String {
    t_args!("report-running", "count" => count)
}

/// Printed before the case runs, so a hanging command shows where it hangs.
pub fn render_case_start(name: &str) -> String {
    format!("{name}... ")
}

pub fn render_outcome(outcome: Outcome) -> String {
    let label = match outcome {
        Outcome::Success => t!("report-success"),
        Outcome::Failure => t!("report-failure"),
        Outcome::NoOutputFile => t!("report-no-output"),
    };
    Style::from(outcome).paint(&label).to_string()
}

pub fn render_summary(summary: &Summary) -> String {
    if summary.all_passed() {
        t!("report-all-passed")
    } else {
        t_args!("report-some-failed",
            "passed" => summary.passed,
            "failed" => summary.total - summary.passed
        )
    }
}

/// One line per discovered case, noting whether its output file exists.
pub fn render_listing(cases: &CaseMap) -> String {
    let mut out = String::new();
    for (name, case) in cases {
        let status = match case {
            Some(_) => Style::Success.paint(&t!("list-has-output")),
            None => Style::Missing.paint(&t!("list-no-output")),
        };
        out.push_str(&format!("{name} ({status})\n"));
    }
    out
}
