//! Argument building for system-level NirCmd verbs: screenshots, sounds,
//! speech, clipboard, tray balloons, volume and dialogs.

use crate::system::types::{Balloon, ScreenshotTarget, Speech};

/// NirCmd reports "Yes" from `qboxcom` through this exit code.
pub const QUESTION_BOX_YES_EXIT_CODE: i32 = 48;

/// Build the screenshot argument vector.
///
/// The verb encodes the capture target; a region capture uses the
/// primary-monitor verb with the region appended.
pub fn build_screenshot_args(target: &ScreenshotTarget, image_path: &str) -> Vec<String> {
    match target {
        ScreenshotTarget::PrimaryMonitor => {
            vec!["savescreenshot".to_string(), image_path.to_string()]
        }
        ScreenshotTarget::AllMonitors => {
            vec!["savescreenshotfull".to_string(), image_path.to_string()]
        }
        ScreenshotTarget::ActiveWindow => {
            vec!["savescreenshotwin".to_string(), image_path.to_string()]
        }
        ScreenshotTarget::Region(region) => vec![
            "savescreenshot".to_string(),
            image_path.to_string(),
            region.x.to_string(),
            region.y.to_string(),
            region.width.to_string(),
            region.height.to_string(),
        ],
    }
}

/// `beep <frequency-hz> <duration-ms>`.
pub fn build_beep_args(frequency: u32, duration_ms: u32) -> Vec<String> {
    vec![
        "beep".to_string(),
        frequency.to_string(),
        duration_ms.to_string(),
    ]
}

/// The standard Windows beep.
pub fn build_stdbeep_args() -> Vec<String> {
    vec!["stdbeep".to_string()]
}

/// `speak text <text> <rate> [volume]`; rate defaults to 0.
pub fn build_speak_args(speech: &Speech) -> Vec<String> {
    let mut args = vec![
        "speak".to_string(),
        "text".to_string(),
        speech.text.clone(),
        speech.rate.unwrap_or(0).to_string(),
    ];
    if let Some(volume) = speech.volume {
        args.push(volume.to_string());
    }
    args
}

/// `clipboard set <text>`.
pub fn build_clipboard_set_args(text: &str) -> Vec<String> {
    vec!["clipboard".to_string(), "set".to_string(), text.to_string()]
}

/// `clipboard clear`.
pub fn build_clipboard_clear_args() -> Vec<String> {
    vec!["clipboard".to_string(), "clear".to_string()]
}

/// `trayballoon <title> <text> shell32.dll,<icon> <timeout-ms>`.
pub fn build_balloon_args(balloon: &Balloon) -> Vec<String> {
    vec![
        "trayballoon".to_string(),
        balloon.title.clone(),
        balloon.text.clone(),
        format!("shell32.dll,{}", balloon.icon),
        balloon.timeout.to_string(),
    ]
}

/// `setsysvolume <scaled>`: NirCmd takes 0..=65535, callers pass 0..=100.
pub fn build_set_volume_args(volume: u8) -> Vec<String> {
    let scaled = (f64::from(volume.min(100)) * 655.35).floor() as u32;
    vec!["setsysvolume".to_string(), scaled.to_string()]
}

/// `mutesysvolume 1|0`.
pub fn build_mute_args(mute: bool) -> Vec<String> {
    vec![
        "mutesysvolume".to_string(),
        if mute { "1" } else { "0" }.to_string(),
    ]
}

/// `infobox <text> <title>` - note the text-before-title argument order.
pub fn build_info_box_args(title: &str, text: &str) -> Vec<String> {
    vec!["infobox".to_string(), text.to_string(), title.to_string()]
}

/// `qboxcom <text> <title> returnval 0x30`: a yes/no dialog whose answer
/// comes back through the exit code ([`QUESTION_BOX_YES_EXIT_CODE`]).
pub fn build_question_box_args(title: &str, text: &str) -> Vec<String> {
    vec![
        "qboxcom".to_string(),
        text.to_string(),
        title.to_string(),
        "returnval".to_string(),
        "0x30".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::types::ScreenRegion;

    #[test]
    fn test_screenshot_verbs_per_target() {
        assert_eq!(
            build_screenshot_args(&ScreenshotTarget::PrimaryMonitor, "c:\\t\\deno.png"),
            vec!["savescreenshot", "c:\\t\\deno.png"]
        );
        assert_eq!(
            build_screenshot_args(&ScreenshotTarget::AllMonitors, "out.png"),
            vec!["savescreenshotfull", "out.png"]
        );
        assert_eq!(
            build_screenshot_args(&ScreenshotTarget::ActiveWindow, "out.png"),
            vec!["savescreenshotwin", "out.png"]
        );
    }

    #[test]
    fn test_screenshot_region_appends_coordinates() {
        let target = ScreenshotTarget::Region(ScreenRegion::new(10, 20, 300, 500));
        assert_eq!(
            build_screenshot_args(&target, "out.png"),
            vec!["savescreenshot", "out.png", "10", "20", "300", "500"]
        );
    }

    #[test]
    fn test_beep_args() {
        assert_eq!(build_beep_args(500, 1000), vec!["beep", "500", "1000"]);
        assert_eq!(build_stdbeep_args(), vec!["stdbeep"]);
    }

    #[test]
    fn test_speak_defaults_rate_to_zero() {
        let speech = Speech::new("Hello Deno.");
        assert_eq!(
            build_speak_args(&speech),
            vec!["speak", "text", "Hello Deno.", "0"]
        );
    }

    #[test]
    fn test_speak_with_rate_and_volume() {
        let speech = Speech {
            text: "hi".to_string(),
            rate: Some(-3),
            volume: Some(80),
        };
        assert_eq!(
            build_speak_args(&speech),
            vec!["speak", "text", "hi", "-3", "80"]
        );
    }

    #[test]
    fn test_clipboard_args() {
        assert_eq!(
            build_clipboard_set_args("Hello"),
            vec!["clipboard", "set", "Hello"]
        );
        assert_eq!(build_clipboard_clear_args(), vec!["clipboard", "clear"]);
    }

    #[test]
    fn test_balloon_args() {
        let balloon = Balloon {
            title: "Deno".to_string(),
            text: "Hello from deno".to_string(),
            icon: 300,
            timeout: 2000,
        };
        assert_eq!(
            build_balloon_args(&balloon),
            vec![
                "trayballoon",
                "Deno",
                "Hello from deno",
                "shell32.dll,300",
                "2000"
            ]
        );
    }

    #[test]
    fn test_volume_scaling() {
        assert_eq!(build_set_volume_args(0), vec!["setsysvolume", "0"]);
        assert_eq!(build_set_volume_args(90), vec!["setsysvolume", "58981"]);
        assert_eq!(build_set_volume_args(100), vec!["setsysvolume", "65535"]);
    }

    #[test]
    fn test_volume_clamps_above_100() {
        assert_eq!(build_set_volume_args(255), vec!["setsysvolume", "65535"]);
    }

    #[test]
    fn test_mute_args() {
        assert_eq!(build_mute_args(true), vec!["mutesysvolume", "1"]);
        assert_eq!(build_mute_args(false), vec!["mutesysvolume", "0"]);
    }

    #[test]
    fn test_dialog_args_put_text_before_title() {
        assert_eq!(
            build_info_box_args("Deno", "Deno is great!"),
            vec!["infobox", "Deno is great!", "Deno"]
        );
        assert_eq!(
            build_question_box_args("A Question", "Quit smoking?"),
            vec!["qboxcom", "Quit smoking?", "A Question", "returnval", "0x30"]
        );
    }
}
