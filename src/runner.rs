use crate::t_args;
use crate::types::TestCase;
use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Something that can turn a case's input into actual output.
pub trait Runner {
    /// Runs once with `data` as the structured payload and `input` on stdin,
    /// returning everything written to stdout.
    fn run(&self, data: &Value, input: &[u8]) -> Result<Vec<u8>>;
}

/// Runs an external program as `<cmd> -d <json> -`.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    pub cmd: PathBuf,
}

impl CommandRunner {
    pub fn new(cmd: impl Into<PathBuf>) -> Self {
        Self { cmd: cmd.into() }
    }

    pub fn args(data: &Value) -> Vec<String> {
        vec!["-d".to_string(), data.to_string(), "-".to_string()]
    }
}

impl Runner for CommandRunner {
    fn run(&self, data: &Value, input: &[u8]) -> Result<Vec<u8>> {
        let mut cmd = Command::new(&self.cmd);
        cmd.args(Self::args(data))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // A program that cannot start simply produced no output.
        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!("Could not start '{}': {e}", self.cmd.display());
                return Ok(Vec::new());
            }
        };

        let mut stdin = child.stdin.take().ok_or_else(|| anyhow!("Missing stdin"))?;

        // Feed stdin from its own thread so a full stdout pipe cannot stall us.
        let out = std::thread::scope(|s| {
            // Dropping stdin at the end of the thread signals EOF.
            let writer = s.spawn(move || match stdin.write_all(input) {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(e),
                _ => Ok(()),
            });
            let out = child.wait_with_output();
            let written = writer
                .join()
                .map_err(|_| anyhow!("stdin writer thread panicked"))?;
            written.context("Failed to write to stdin")?;
            out.context("Failed to wait for command")
        })?;

        if !out.status.success() {
            debug!(
                "'{}' exited with {} ({} bytes on stderr)",
                self.cmd.display(),
                out.status,
                out.stderr.len()
            );
        }
        Ok(out.stdout)
    }
}

/// Runs `case` and compares stdout byte for byte with the expected output.
pub fn test_case<R: Runner + ?Sized>(runner: &R, case: &TestCase) -> Result<bool> {
    let input = fs::read(&case.input_file)
        .with_context(|| t_args!("runner-failed-to-read", "file" => case.input_file.display()))?;
    let expected = fs::read(&case.output_file)
        .with_context(|| t_args!("runner-failed-to-read", "file" => case.output_file.display()))?;

    let actual = runner.run(&case.data, &input)?;
    let passed = actual == expected;
    debug!(
        "'{}': {} bytes expected, {} bytes actual, passed = {passed}",
        case.name,
        expected.len(),
        actual.len()
    );
    Ok(passed)
}
