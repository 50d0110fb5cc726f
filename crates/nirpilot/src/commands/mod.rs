use clap::ArgMatches;
use tracing::{error, warn};

use nirpilot_core::config::{PilotConfig, loading};
use nirpilot_core::runner::UNSUPPORTED_HOST_EXIT_CODE;

mod clipboard;
mod completions;
mod keyboard;
mod mouse;
mod system;
mod window;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("window", sub_matches)) => window::handle_window_command(matches, sub_matches),
        Some(("mouse", sub_matches)) => mouse::handle_mouse_command(matches, sub_matches),
        Some(("key", sub_matches)) => keyboard::handle_key_command(matches, sub_matches),
        Some(("clipboard", sub_matches)) => {
            clipboard::handle_clipboard_command(matches, sub_matches)
        }
        Some(("system", sub_matches)) => system::handle_system_command(matches, sub_matches),
        Some(("completions", sub_matches)) => completions::handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load the config hierarchy, degrading to defaults on failure.
pub(crate) fn load_config_or_default() -> PilotConfig {
    match loading::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            warn!(event = "cli.config_load_failed", error = %e);
            eprintln!("Warning: failed to load config, using defaults: {}", e);
            PilotConfig::default()
        }
    }
}

/// Either print the argument vector (dry run) or hand it to the given
/// runner closure and report the outcome.
pub(crate) fn dispatch(
    matches: &ArgMatches,
    args: Vec<String>,
    run: impl FnOnce(&[String]) -> Result<i32, Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    if matches.get_flag("dry-run") {
        print_args(matches, &args);
        return Ok(());
    }
    let exit_code = run(&args)?;
    report_exit_code(exit_code)
}

pub(crate) fn print_args(matches: &ArgMatches, args: &[String]) {
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string(args).unwrap_or_default());
    } else {
        println!("{}", args.join(" "));
    }
}

pub(crate) fn report_exit_code(exit_code: i32) -> Result<(), Box<dyn std::error::Error>> {
    if exit_code == UNSUPPORTED_HOST_EXIT_CODE {
        eprintln!("Note: NirCmd requires Windows; nothing was executed on this host.");
        return Ok(());
    }
    if exit_code != 0 {
        return Err(format!("nircmd exited with code {}", exit_code).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_exit_code_zero_is_ok() {
        assert!(report_exit_code(0).is_ok());
    }

    #[test]
    fn test_report_exit_code_unsupported_host_is_ok() {
        assert!(report_exit_code(UNSUPPORTED_HOST_EXIT_CODE).is_ok());
    }

    #[test]
    fn test_report_exit_code_nonzero_is_error() {
        let err = report_exit_code(2).unwrap_err();
        assert!(err.to_string().contains("code 2"));
    }
}
