use std::path::PathBuf;

/// Program name of the external automation executable, resolved on PATH when
/// no explicit `[runner] binary_path` is configured.
pub const NIRCMD_PROGRAM: &str = "nircmd";

/// Exit code reported when the host platform cannot run NirCmd at all.
///
/// Non-Windows hosts short-circuit before any spawn is attempted and report
/// this sentinel instead of failing, so cross-platform callers can probe.
pub const UNSUPPORTED_HOST_EXIT_CODE: i32 = -1;

/// A fully-assembled invocation of the external executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: PathBuf, args: Vec<String>) -> Self {
        Self { program, args }
    }

    /// Single-line rendering for logs.
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
