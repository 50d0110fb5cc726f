use clap::ArgMatches;
use tracing::info;

use nirpilot_core::keyboard::{KeyAction, build_send_key_args, send_key};

use super::{dispatch, load_config_or_default};

pub(crate) fn handle_key_command(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let code_str = matches
        .get_one::<String>("code")
        .ok_or("Key code argument is required")?;
    let key_code = parse_key_code(code_str)?;
    let action: KeyAction = matches
        .get_one::<String>("action")
        .ok_or("Action argument is required")?
        .parse()?;

    info!(
        event = "cli.key_started",
        key_code,
        action = action.token()
    );

    dispatch(globals, build_send_key_args(key_code, action), |_| {
        let config = load_config_or_default();
        Ok(send_key(key_code, action, &config)?)
    })?;

    info!(
        event = "cli.key_completed",
        key_code,
        action = action.token()
    );
    Ok(())
}

/// Accepts decimal (`65`) or 0x-prefixed hex (`0x41`) virtual-key codes.
fn parse_key_code(value: &str) -> Result<u16, Box<dyn std::error::Error>> {
    let parsed = if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16)
    } else {
        value.parse::<u16>()
    };
    parsed.map_err(|_| format!("Invalid key code: {value}").into())
}
