use crate::errors::PilotError;
use crate::runner::errors::RunnerError;
use crate::window::types::WindowVerb;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Locator field '{field}' must not be blank")]
    BlankValue { field: &'static str },

    #[error("Locator has no recognized field set (expected one of: active, className, title, process)")]
    NoLocatorField,

    #[error("Action '{verb}' requires a size payload (x, y, width, height)")]
    MissingGeometry { verb: WindowVerb },

    #[error("Failed to invoke nircmd: {source}")]
    Runner {
        #[from]
        source: RunnerError,
    },
}

impl PilotError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::BlankValue { .. } => "BLANK_VALUE",
            WindowError::NoLocatorField => "NO_LOCATOR_FIELD",
            WindowError::MissingGeometry { .. } => "MISSING_GEOMETRY",
            WindowError::Runner { .. } => "WINDOW_RUNNER_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            WindowError::BlankValue { .. }
                | WindowError::NoLocatorField
                | WindowError::MissingGeometry { .. }
        )
    }
}
