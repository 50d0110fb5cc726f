use clap::ArgMatches;
use tracing::{error, info};

use nirpilot_core::system::operations::{
    build_balloon_args, build_beep_args, build_info_box_args, build_mute_args,
    build_question_box_args, build_screenshot_args, build_set_volume_args, build_speak_args,
    build_stdbeep_args,
};
use nirpilot_core::system::{
    Balloon, ScreenRegion, ScreenshotTarget, Speech, balloon, beep, info_box, mute, question_box,
    screenshot, set_volume, speak, unmute, winbeep,
};

use super::{dispatch, load_config_or_default, print_args};

pub(crate) fn handle_system_command(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("beep", sub_matches)) => handle_beep(globals, sub_matches),
        Some(("winbeep", _)) => handle_winbeep(globals),
        Some(("screenshot", sub_matches)) => handle_screenshot(globals, sub_matches),
        Some(("speak", sub_matches)) => handle_speak(globals, sub_matches),
        Some(("volume", sub_matches)) => handle_volume(globals, sub_matches),
        Some(("mute", _)) => handle_mute(globals, true),
        Some(("unmute", _)) => handle_mute(globals, false),
        Some(("infobox", sub_matches)) => handle_info_box(globals, sub_matches),
        Some(("question", sub_matches)) => handle_question(globals, sub_matches),
        Some(("balloon", sub_matches)) => handle_balloon(globals, sub_matches),
        _ => {
            error!(event = "cli.system_command_unknown");
            Err("Unknown system command".into())
        }
    }
}

fn handle_beep(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let frequency = *matches
        .get_one::<u32>("frequency")
        .ok_or("Frequency argument is required")?;
    let duration = *matches
        .get_one::<u32>("duration")
        .ok_or("Duration argument is required")?;

    info!(event = "cli.system_beep_started", frequency, duration);
    dispatch(globals, build_beep_args(frequency, duration), |_| {
        let config = load_config_or_default();
        Ok(beep(frequency, duration, &config)?)
    })
}

fn handle_winbeep(globals: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.system_winbeep_started");
    dispatch(globals, build_stdbeep_args(), |_| {
        let config = load_config_or_default();
        Ok(winbeep(&config)?)
    })
}

fn handle_screenshot(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = matches
        .get_one::<String>("path")
        .ok_or("Path argument is required")?;
    let target = parse_screenshot_target(matches)?;

    info!(event = "cli.system_screenshot_started", path = path.as_str());
    dispatch(globals, build_screenshot_args(&target, path), |_| {
        let config = load_config_or_default();
        Ok(screenshot(&target, path, &config)?)
    })
}

fn parse_screenshot_target(
    matches: &ArgMatches,
) -> Result<ScreenshotTarget, Box<dyn std::error::Error>> {
    let region = [
        matches.get_one::<i32>("x"),
        matches.get_one::<i32>("y"),
        matches.get_one::<i32>("width"),
        matches.get_one::<i32>("height"),
    ];

    if region.iter().any(Option::is_some) {
        return match region {
            [Some(x), Some(y), Some(width), Some(height)] => Ok(ScreenshotTarget::Region(
                ScreenRegion::new(*x, *y, *width, *height),
            )),
            _ => {
                Err("Region flags --x, --y, --width and --height must be given together".into())
            }
        };
    }

    match matches
        .get_one::<String>("target")
        .map(String::as_str)
        .unwrap_or("primary")
    {
        "all" => Ok(ScreenshotTarget::AllMonitors),
        "window" => Ok(ScreenshotTarget::ActiveWindow),
        _ => Ok(ScreenshotTarget::PrimaryMonitor),
    }
}

fn handle_speak(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut speech = Speech::new(
        matches
            .get_one::<String>("text")
            .ok_or("Text argument is required")?
            .clone(),
    );
    speech.rate = matches.get_one::<i32>("rate").copied();
    speech.volume = matches.get_one::<i32>("volume").copied();

    info!(event = "cli.system_speak_started");
    dispatch(globals, build_speak_args(&speech), |_| {
        let config = load_config_or_default();
        Ok(speak(&speech, &config)?)
    })
}

fn handle_volume(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = *matches
        .get_one::<u8>("level")
        .ok_or("Level argument is required")?;

    info!(event = "cli.system_volume_started", level);
    dispatch(globals, build_set_volume_args(level), |_| {
        let config = load_config_or_default();
        Ok(set_volume(level, &config)?)
    })
}

fn handle_mute(globals: &ArgMatches, muted: bool) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.system_mute_started", muted);
    dispatch(globals, build_mute_args(muted), |_| {
        let config = load_config_or_default();
        if muted {
            Ok(mute(&config)?)
        } else {
            Ok(unmute(&config)?)
        }
    })
}

fn handle_info_box(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let title = matches
        .get_one::<String>("title")
        .ok_or("Title argument is required")?;
    let text = matches
        .get_one::<String>("text")
        .ok_or("Text argument is required")?;

    info!(event = "cli.system_infobox_started");
    dispatch(globals, build_info_box_args(title, text), |_| {
        let config = load_config_or_default();
        Ok(info_box(title, text, &config)?)
    })
}

fn handle_question(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let title = matches
        .get_one::<String>("title")
        .ok_or("Title argument is required")?;
    let text = matches
        .get_one::<String>("text")
        .ok_or("Text argument is required")?;

    if globals.get_flag("dry-run") {
        print_args(globals, &build_question_box_args(title, text));
        return Ok(());
    }

    info!(event = "cli.system_question_started");
    let config = load_config_or_default();
    let answered_yes = question_box(title, text, &config)?;
    println!("{}", if answered_yes { "yes" } else { "no" });
    Ok(())
}

fn handle_balloon(
    globals: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let notification = Balloon {
        title: matches
            .get_one::<String>("title")
            .ok_or("Title argument is required")?
            .clone(),
        text: matches
            .get_one::<String>("text")
            .ok_or("Text argument is required")?
            .clone(),
        icon: *matches.get_one::<u32>("icon").unwrap_or(&77),
        timeout: *matches.get_one::<u32>("timeout").unwrap_or(&5000),
    };

    info!(event = "cli.system_balloon_started");
    dispatch(globals, build_balloon_args(&notification), |_| {
        let config = load_config_or_default();
        Ok(balloon(&notification, &config)?)
    })
}
