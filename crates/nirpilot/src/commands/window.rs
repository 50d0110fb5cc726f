use clap::ArgMatches;
use tracing::info;

use nirpilot_core::window::{
    ActionSpec, LocatorSpec, ProcessRef, Rect, TitleMatch, TitleSpec, WindowVerb, window_action,
    window_command,
};

use super::{dispatch, load_config_or_default};

pub(crate) fn handle_window_command(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let verb: WindowVerb = matches
        .get_one::<String>("action")
        .ok_or("Action argument is required")?
        .parse()?;

    let locator_spec = build_locator_spec(matches);
    let action_spec = ActionSpec {
        action: verb,
        size: parse_geometry(matches)?,
    };

    let locator = locator_spec.resolve().map_err(|e| {
        format!("{}\nTip: pass one of --title, --class, --process or --active.", e)
    })?;
    let action = action_spec.resolve().map_err(|e| {
        format!("{}\nTip: pass --x, --y, --width and --height together.", e)
    })?;

    info!(event = "cli.window_started", verb = verb.token());

    let args = window_command(&locator, &action).map_err(|e| e.to_string())?;
    dispatch(globals, args, |_| {
        let config = load_config_or_default();
        Ok(window_action(&locator, &action, &config)?)
    })?;

    info!(event = "cli.window_completed", verb = verb.token());
    Ok(())
}

fn build_locator_spec(matches: &ArgMatches) -> LocatorSpec {
    LocatorSpec {
        active: matches.get_flag("active").then_some(true),
        class_name: matches.get_one::<String>("class").cloned(),
        title: matches.get_one::<String>("title").map(|value| TitleSpec {
            value: value.clone(),
            match_mode: parse_title_match(
                matches
                    .get_one::<String>("title-match")
                    .map(String::as_str)
                    .unwrap_or("exact"),
            ),
        }),
        process: matches.get_one::<String>("process").map(parse_process_ref),
    }
}

fn parse_title_match(value: &str) -> TitleMatch {
    match value {
        "contains" => TitleMatch::Contains,
        "starts-with" => TitleMatch::StartsWith,
        "ends-with" => TitleMatch::EndsWith,
        _ => TitleMatch::Exact,
    }
}

fn parse_process_ref(value: &String) -> ProcessRef {
    match value.parse::<u32>() {
        Ok(id) => ProcessRef::Id(id),
        Err(_) => ProcessRef::Name(value.clone()),
    }
}

/// Geometry flags must be given all together or not at all.
fn parse_geometry(matches: &ArgMatches) -> Result<Option<Rect>, Box<dyn std::error::Error>> {
    let components = [
        matches.get_one::<i32>("x"),
        matches.get_one::<i32>("y"),
        matches.get_one::<i32>("width"),
        matches.get_one::<i32>("height"),
    ];

    if components.iter().all(Option::is_none) {
        return Ok(None);
    }
    match components {
        [Some(x), Some(y), Some(width), Some(height)] => {
            Ok(Some(Rect::new(*x, *y, *width, *height)))
        }
        _ => Err("Geometry flags --x, --y, --width and --height must be given together".into()),
    }
}
