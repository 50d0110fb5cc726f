use tracing::info;

use crate::config::PilotConfig;
use crate::mouse::operations;
use crate::mouse::types::{ButtonAction, MouseButton};
use crate::runner::{self, RunnerError};

/// Move the mouse cursor to absolute screen coordinates.
pub fn set_cursor(x: i32, y: i32, config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(event = "core.mouse.set_cursor_started", x, y);

    let args = operations::build_set_cursor_args(x, y);
    let exit_code = runner::run_nircmd(&args, config)?;

    info!(event = "core.mouse.set_cursor_completed", x, y, exit_code);

    Ok(exit_code)
}

/// Send a mouse button event at the current cursor position.
pub fn send_button(
    button: MouseButton,
    action: ButtonAction,
    config: &PilotConfig,
) -> Result<i32, RunnerError> {
    info!(
        event = "core.mouse.send_button_started",
        button = button.token(),
        action = action.token()
    );

    let args = operations::build_send_mouse_args(button, action);
    let exit_code = runner::run_nircmd(&args, config)?;

    info!(
        event = "core.mouse.send_button_completed",
        button = button.token(),
        exit_code
    );

    Ok(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_mouse_handlers_short_circuit_off_windows() {
        let config = PilotConfig::default();
        assert_eq!(
            set_cursor(1, 2, &config).unwrap(),
            runner::UNSUPPORTED_HOST_EXIT_CODE
        );
        assert_eq!(
            send_button(MouseButton::Right, ButtonAction::Click, &config).unwrap(),
            runner::UNSUPPORTED_HOST_EXIT_CODE
        );
    }
}
