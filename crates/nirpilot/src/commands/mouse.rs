use clap::ArgMatches;
use tracing::{error, info};

use nirpilot_core::mouse::{
    ButtonAction, MouseButton, build_send_mouse_args, build_set_cursor_args, send_button,
    set_cursor,
};

use super::{dispatch, load_config_or_default};

pub(crate) fn handle_mouse_command(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("cursor", sub_matches)) => handle_cursor(globals, sub_matches),
        Some(("button", sub_matches)) => handle_button(globals, sub_matches),
        _ => {
            error!(event = "cli.mouse_command_unknown");
            Err("Unknown mouse command".into())
        }
    }
}

fn handle_cursor(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let x = *matches
        .get_one::<i32>("x")
        .ok_or("x coordinate is required")?;
    let y = *matches
        .get_one::<i32>("y")
        .ok_or("y coordinate is required")?;

    info!(event = "cli.mouse_cursor_started", x, y);

    dispatch(globals, build_set_cursor_args(x, y), |_| {
        let config = load_config_or_default();
        Ok(set_cursor(x, y, &config)?)
    })?;

    info!(event = "cli.mouse_cursor_completed", x, y);
    Ok(())
}

fn handle_button(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let button: MouseButton = matches
        .get_one::<String>("button")
        .ok_or("Button argument is required")?
        .parse()?;
    let action: ButtonAction = matches
        .get_one::<String>("action")
        .ok_or("Action argument is required")?
        .parse()?;

    info!(
        event = "cli.mouse_button_started",
        button = button.token(),
        action = action.token()
    );

    dispatch(globals, build_send_mouse_args(button, action), |_| {
        let config = load_config_or_default();
        Ok(send_button(button, action, &config)?)
    })?;

    info!(
        event = "cli.mouse_button_completed",
        button = button.token(),
        action = action.token()
    );
    Ok(())
}
