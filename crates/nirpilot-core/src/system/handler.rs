use tracing::info;

use crate::config::PilotConfig;
use crate::runner::{self, RunnerError};
use crate::system::operations;
use crate::system::types::{Balloon, ScreenshotTarget, Speech};

/// Save a screenshot of the given target to `image_path`.
///
/// Supported extensions: .bmp, .gif, .png, .jpg, .tiff. The special path
/// `*clipboard*` copies the image to the clipboard instead.
pub fn screenshot(
    target: &ScreenshotTarget,
    image_path: &str,
    config: &PilotConfig,
) -> Result<i32, RunnerError> {
    info!(
        event = "core.system.screenshot_started",
        target = ?target,
        image_path
    );

    let args = operations::build_screenshot_args(target, image_path);
    let exit_code = runner::run_nircmd(&args, config)?;

    info!(event = "core.system.screenshot_completed", exit_code);
    Ok(exit_code)
}

/// Play a beep of `frequency` Hz for `duration_ms` milliseconds.
pub fn beep(frequency: u32, duration_ms: u32, config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(event = "core.system.beep_started", frequency, duration_ms);
    runner::run_nircmd(&operations::build_beep_args(frequency, duration_ms), config)
}

/// Play the standard Windows beep.
pub fn winbeep(config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(event = "core.system.stdbeep_started");
    runner::run_nircmd(&operations::build_stdbeep_args(), config)
}

/// Speak the given text through the system speech engine.
pub fn speak(speech: &Speech, config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(
        event = "core.system.speak_started",
        text_len = speech.text.len(),
        rate = ?speech.rate,
        volume = ?speech.volume
    );
    runner::run_nircmd(&operations::build_speak_args(speech), config)
}

/// Put the given text into the clipboard.
pub fn set_clipboard(text: &str, config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(event = "core.system.clipboard_set_started", text_len = text.len());
    runner::run_nircmd(&operations::build_clipboard_set_args(text), config)
}

/// Clear the clipboard.
pub fn clear_clipboard(config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(event = "core.system.clipboard_clear_started");
    runner::run_nircmd(&operations::build_clipboard_clear_args(), config)
}

/// Display a tray balloon notification.
pub fn balloon(balloon: &Balloon, config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(
        event = "core.system.balloon_started",
        title = %balloon.title,
        timeout = balloon.timeout
    );
    runner::run_nircmd(&operations::build_balloon_args(balloon), config)
}

/// Set the system volume, `0` (mute) to `100` (highest).
pub fn set_volume(volume: u8, config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(event = "core.system.set_volume_started", volume);
    runner::run_nircmd(&operations::build_set_volume_args(volume), config)
}

/// Mute the system sound.
pub fn mute(config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(event = "core.system.mute_started");
    runner::run_nircmd(&operations::build_mute_args(true), config)
}

/// Unmute the system sound.
pub fn unmute(config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(event = "core.system.unmute_started");
    runner::run_nircmd(&operations::build_mute_args(false), config)
}

/// Show an information dialog.
pub fn info_box(title: &str, text: &str, config: &PilotConfig) -> Result<i32, RunnerError> {
    info!(event = "core.system.info_box_started", title);
    runner::run_nircmd(&operations::build_info_box_args(title, text), config)
}

/// Show a yes/no question dialog. Returns `true` when the user answers yes.
///
/// On a non-Windows host this is always `false` (sentinel exit code).
pub fn question_box(title: &str, text: &str, config: &PilotConfig) -> Result<bool, RunnerError> {
    info!(event = "core.system.question_box_started", title);

    let exit_code = runner::run_nircmd(&operations::build_question_box_args(title, text), config)?;
    Ok(exit_code == operations::QUESTION_BOX_YES_EXIT_CODE)
}
