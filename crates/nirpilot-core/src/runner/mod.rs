//! Process invoker for the external NirCmd executable.
//!
//! This is the single place in the crate that touches a process boundary.
//! The translators hand it a finished token vector; it resolves the binary,
//! spawns it and reports the exit code. Non-Windows hosts short-circuit with
//! a sentinel code instead of spawning.

pub mod errors;
pub mod operations;
pub mod types;

pub use errors::RunnerError;
pub use operations::{resolve_binary, run_nircmd};
pub use types::{Invocation, NIRCMD_PROGRAM, UNSUPPORTED_HOST_EXIT_CODE};
