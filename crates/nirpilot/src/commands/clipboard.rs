use clap::ArgMatches;
use tracing::{error, info};

use nirpilot_core::system::operations::{build_clipboard_clear_args, build_clipboard_set_args};
use nirpilot_core::system::{clear_clipboard, set_clipboard};

use super::{dispatch, load_config_or_default};

pub(crate) fn handle_clipboard_command(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("set", sub_matches)) => {
            let text = sub_matches
                .get_one::<String>("text")
                .ok_or("Text argument is required")?;

            info!(event = "cli.clipboard_set_started");
            dispatch(globals, build_clipboard_set_args(text), |_| {
                let config = load_config_or_default();
                Ok(set_clipboard(text, &config)?)
            })?;
            info!(event = "cli.clipboard_set_completed");
            Ok(())
        }
        Some(("clear", _)) => {
            info!(event = "cli.clipboard_clear_started");
            dispatch(globals, build_clipboard_clear_args(), |_| {
                let config = load_config_or_default();
                Ok(clear_clipboard(&config)?)
            })?;
            info!(event = "cli.clipboard_clear_completed");
            Ok(())
        }
        _ => {
            error!(event = "cli.clipboard_command_unknown");
            Err("Unknown clipboard command".into())
        }
    }
}
