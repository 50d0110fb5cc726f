use serde::{Deserialize, Serialize};

/// Rectangular screen region in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRegion {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// What a screenshot should capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenshotTarget {
    PrimaryMonitor,
    AllMonitors,
    ActiveWindow,
    Region(ScreenRegion),
}

/// Text-to-speech request.
///
/// `rate` ranges -10 (slowest) to 10 (fastest) and defaults to 0;
/// `volume` ranges 0 to 100 and is only passed when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speech {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<i32>,
}

impl Speech {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: None,
            volume: None,
        }
    }
}

/// Tray balloon notification.
///
/// `icon` is an icon index inside `shell32.dll`; `timeout` is in
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balloon {
    pub title: String,
    pub text: String,
    pub icon: u32,
    pub timeout: u32,
}
