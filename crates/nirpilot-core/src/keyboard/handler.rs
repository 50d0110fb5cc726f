use tracing::info;

use crate::config::PilotConfig;
use crate::keyboard::operations;
use crate::keyboard::types::{EditCombo, KeyAction};
use crate::runner::{self, RunnerError};

/// Send a keyboard event for the given virtual-key code.
///
/// Returns the NirCmd process exit code.
pub fn send_key(key_code: u16, action: KeyAction, config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(
        event = "core.keyboard.send_key_started",
        key_code,
        action = action.token()
    );

    let args = operations::build_send_key_args(key_code, action);
    let exit_code = runner::run_nircmd(&args, config)?;

    info!(event = "core.keyboard.send_key_completed", key_code, exit_code);

    Ok(exit_code)
}

/// Issue the three-event `sendkey` sequence for a Ctrl combo.
///
/// Each event is a separate invocation; returns the last exit code.
pub fn send_combo(combo: EditCombo, config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(event = "core.keyboard.combo_started", combo = ?combo);

    let mut exit_code = 0;
    for args in operations::build_combo_sequence(combo) {
        exit_code = runner::run_nircmd(&args, config)?;
    }

    info!(event = "core.keyboard.combo_completed", combo = ?combo, exit_code);

    Ok(exit_code)
}

/// Ctrl+X.
pub fn cut(config: &PilotConfig) -> Result<i32, RunnerError> {
    send_combo(EditCombo::Cut, config)
}

/// Ctrl+C.
pub fn copy(config: &PilotConfig) -> Result<i32, RunnerError> {
    send_combo(EditCombo::Copy, config)
}

/// Ctrl+V.
pub fn paste(config: &PilotConfig) -> Result<i32, RunnerError> {
    send_combo(EditCombo::Paste, config)
}

/// Ctrl+A.
pub fn select_all(config: &PilotConfig) -> Result<i32, RunnerError> {
    send_combo(EditCombo::SelectAll, config)
}
