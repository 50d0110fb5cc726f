use crate::errors::PilotError;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("NirCmd executable '{program}' not found (set [runner] binary_path or add it to PATH)")]
    BinaryNotFound { program: String },

    #[error("Failed to spawn nircmd process: {message}")]
    SpawnFailed { message: String },
}

impl PilotError for RunnerError {
    fn error_code(&self) -> &'static str {
        match self {
            RunnerError::BinaryNotFound { .. } => "NIRCMD_NOT_FOUND",
            RunnerError::SpawnFailed { .. } => "NIRCMD_SPAWN_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, RunnerError::BinaryNotFound { .. })
    }
}
