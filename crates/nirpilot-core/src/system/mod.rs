//! System subsystem: screenshots, sounds, speech, clipboard, tray
//! notifications, volume and dialogs.

pub mod handler;
pub mod operations;
pub mod types;

pub use handler::{
    balloon, beep, clear_clipboard, info_box, mute, question_box, screenshot, set_clipboard,
    set_volume, speak, unmute, winbeep,
};
pub use types::{Balloon, ScreenRegion, ScreenshotTarget, Speech};
