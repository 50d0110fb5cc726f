use clap::{Arg, ArgAction, Command, value_parser};
use clap_complete::Shell;

/// The window action tokens accepted on the command line.
pub const WINDOW_ACTIONS: [&str; 12] = [
    "close",
    "activate",
    "flash",
    "max",
    "min",
    "normal",
    "togglemin",
    "togglemax",
    "center",
    "focus",
    "setsize",
    "move",
];

fn geometry_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_parser(value_parser!(i32))
        .allow_negative_numbers(true)
        .help("Geometry component (required together with the other three for setsize/move)")
}

pub fn build_cli() -> Command {
    Command::new("nirpilot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Drive windows, keyboard, mouse and system actions through NirCmd")
        .long_about(
            "nirpilot translates structured desktop-automation intents into NirCmd \
             argument vectors and invokes the NirCmd executable. On non-Windows hosts \
             commands validate and translate but nothing is spawned.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Print the NirCmd argument vector instead of invoking it")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("With --dry-run, print the argument vector as a JSON array")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("window")
                .about("Find a window and act on it")
                .arg(
                    Arg::new("action")
                        .help("Action to perform on the located window(s)")
                        .required(true)
                        .value_parser(WINDOW_ACTIONS)
                        .index(1),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Locate by window title"),
                )
                .arg(
                    Arg::new("title-match")
                        .long("title-match")
                        .value_parser(["exact", "contains", "starts-with", "ends-with"])
                        .default_value("exact")
                        .help("Title comparison strategy (with --title)"),
                )
                .arg(
                    Arg::new("class")
                        .long("class")
                        .help("Locate by window class name"),
                )
                .arg(
                    Arg::new("process")
                        .long("process")
                        .help("Locate by process: a numeric id or an executable name"),
                )
                .arg(
                    Arg::new("active")
                        .long("active")
                        .help("Target the foreground window")
                        .action(ArgAction::SetTrue),
                )
                .arg(geometry_arg("x"))
                .arg(geometry_arg("y"))
                .arg(geometry_arg("width"))
                .arg(geometry_arg("height")),
        )
        .subcommand(
            Command::new("mouse")
                .about("Cursor positioning and button events")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("cursor")
                        .about("Move the cursor to absolute screen coordinates")
                        .arg(
                            Arg::new("x")
                                .required(true)
                                .value_parser(value_parser!(i32))
                                .allow_negative_numbers(true)
                                .index(1),
                        )
                        .arg(
                            Arg::new("y")
                                .required(true)
                                .value_parser(value_parser!(i32))
                                .allow_negative_numbers(true)
                                .index(2),
                        ),
                )
                .subcommand(
                    Command::new("button")
                        .about("Send a button event at the current cursor position")
                        .arg(
                            Arg::new("button")
                                .required(true)
                                .value_parser(["left", "right", "middle"])
                                .index(1),
                        )
                        .arg(
                            Arg::new("action")
                                .required(true)
                                .value_parser(["click", "dblclick", "down", "up"])
                                .index(2),
                        ),
                ),
        )
        .subcommand(
            Command::new("key")
                .about("Send a virtual-key event")
                .arg(
                    Arg::new("code")
                        .help("Virtual-key code, decimal or 0x-prefixed hex (e.g. 0x41)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("action")
                        .required(true)
                        .value_parser(["press", "down", "up"])
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("clipboard")
                .about("Clipboard operations")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("set")
                        .about("Put text into the clipboard")
                        .arg(Arg::new("text").required(true).index(1)),
                )
                .subcommand(Command::new("clear").about("Clear the clipboard")),
        )
        .subcommand(
            Command::new("system")
                .about("System-level actions: sounds, speech, screenshots, dialogs")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("beep")
                        .about("Play a beep")
                        .arg(
                            Arg::new("frequency")
                                .help("Frequency in hertz")
                                .required(true)
                                .value_parser(value_parser!(u32))
                                .index(1),
                        )
                        .arg(
                            Arg::new("duration")
                                .help("Duration in milliseconds")
                                .required(true)
                                .value_parser(value_parser!(u32))
                                .index(2),
                        ),
                )
                .subcommand(Command::new("winbeep").about("Play the standard Windows beep"))
                .subcommand(
                    Command::new("screenshot")
                        .about("Save a screenshot")
                        .arg(
                            Arg::new("path")
                                .help("Image path (.bmp .gif .png .jpg .tiff) or *clipboard*")
                                .required(true)
                                .index(1),
                        )
                        .arg(
                            Arg::new("target")
                                .long("target")
                                .value_parser(["primary", "all", "window"])
                                .default_value("primary")
                                .help("What to capture: primary monitor, all monitors, or the active window"),
                        )
                        .arg(geometry_arg("x"))
                        .arg(geometry_arg("y"))
                        .arg(geometry_arg("width"))
                        .arg(geometry_arg("height")),
                )
                .subcommand(
                    Command::new("speak")
                        .about("Speak text through the system speech engine")
                        .arg(Arg::new("text").required(true).index(1))
                        .arg(
                            Arg::new("rate")
                                .long("rate")
                                .value_parser(value_parser!(i32))
                                .allow_negative_numbers(true)
                                .help("Speech rate, -10 (slowest) to 10 (fastest)"),
                        )
                        .arg(
                            Arg::new("volume")
                                .long("volume")
                                .value_parser(value_parser!(i32))
                                .help("Speech volume, 0 to 100"),
                        ),
                )
                .subcommand(
                    Command::new("volume")
                        .about("Set the system volume")
                        .arg(
                            Arg::new("level")
                                .help("Volume level, 0 (mute) to 100 (highest)")
                                .required(true)
                                .value_parser(value_parser!(u8))
                                .index(1),
                        ),
                )
                .subcommand(Command::new("mute").about("Mute the system sound"))
                .subcommand(Command::new("unmute").about("Unmute the system sound"))
                .subcommand(
                    Command::new("infobox")
                        .about("Show an information dialog")
                        .arg(Arg::new("title").required(true).index(1))
                        .arg(Arg::new("text").required(true).index(2)),
                )
                .subcommand(
                    Command::new("question")
                        .about("Show a yes/no dialog; prints the answer")
                        .arg(Arg::new("title").required(true).index(1))
                        .arg(Arg::new("text").required(true).index(2)),
                )
                .subcommand(
                    Command::new("balloon")
                        .about("Show a tray balloon notification")
                        .arg(Arg::new("title").required(true).index(1))
                        .arg(Arg::new("text").required(true).index(2))
                        .arg(
                            Arg::new("icon")
                                .long("icon")
                                .value_parser(value_parser!(u32))
                                .default_value("77")
                                .help("Icon index inside shell32.dll"),
                        )
                        .arg(
                            Arg::new("timeout")
                                .long("timeout")
                                .value_parser(value_parser!(u32))
                                .default_value("5000")
                                .help("Timeout in milliseconds"),
                        ),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(value_parser!(Shell))
                        .index(1),
                ),
        )
}
