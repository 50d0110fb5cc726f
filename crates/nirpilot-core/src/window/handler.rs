use tracing::{debug, info};

use crate::config::PilotConfig;
use crate::runner;
use crate::window::errors::WindowError;
use crate::window::operations;
use crate::window::types::{WindowAction, WindowLocator};

/// Subsystem prefix for window commands.
const WIN_SUBSYSTEM: &str = "win";

/// Build the full `win` argument vector for a locator/action pair without
/// invoking anything. Useful for dry runs and callers that manage their own
/// process invocation.
pub fn window_command(
    locator: &WindowLocator,
    action: &WindowAction,
) -> Result<Vec<String>, WindowError> {
    let mut args = operations::build_window_args(locator, action)?;
    args.insert(0, WIN_SUBSYSTEM.to_string());
    Ok(args)
}

/// Execute a window action against the window(s) selected by the locator.
///
/// Validation completes before the runner is consulted, so invalid input
/// never results in a partially-executed external action. Returns the
/// NirCmd process exit code.
pub fn window_action(
    locator: &WindowLocator,
    action: &WindowAction,
    config: &PilotConfig,
) -> Result<i32, WindowError> {
    info!(
        event = "core.window.action_started",
        verb = action.verb().token(),
        locator = ?locator
    );

    let args = window_command(locator, action)?;

    debug!(
        event = "core.window.args_built",
        args = %args.join(" ")
    );

    let exit_code = runner::run_nircmd(&args, config)?;

    info!(
        event = "core.window.action_completed",
        verb = action.verb().token(),
        exit_code
    );

    Ok(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::types::Rect;

    #[test]
    fn test_window_command_prefixes_win() {
        let args = window_command(&"notepad".into(), &WindowAction::Flash).unwrap();
        assert_eq!(args, vec!["win", "flash", "title", "notepad"]);
    }

    #[test]
    fn test_window_command_geometry_order() {
        let args = window_command(
            &"notepad".into(),
            &WindowAction::SetSize(Rect::new(1, 1, 100, 100)),
        )
        .unwrap();
        assert_eq!(
            args,
            vec!["win", "setsize", "title", "notepad", "1", "1", "100", "100"]
        );
    }

    #[test]
    fn test_window_command_invalid_locator_fails_before_prefix() {
        let result = window_command(&"".into(), &WindowAction::Flash);
        assert!(matches!(result, Err(WindowError::BlankValue { .. })));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_window_action_returns_sentinel_off_windows() {
        let config = PilotConfig::default();
        let code = window_action(&"notepad".into(), &WindowAction::Flash, &config).unwrap();
        assert_eq!(code, crate::runner::UNSUPPORTED_HOST_EXIT_CODE);
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_window_action_still_validates_off_windows() {
        // Validation errors surface even though no process would be spawned.
        let config = PilotConfig::default();
        let result = window_action(&"  ".into(), &WindowAction::Flash, &config);
        assert!(matches!(result, Err(WindowError::BlankValue { .. })));
    }
}
