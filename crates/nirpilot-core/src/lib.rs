//! nirpilot-core: drive Windows desktop automation through NirCmd.
//!
//! This library translates structured automation intents (find this window
//! and resize it, send this key, flash the active window) into the exact
//! positional argument vectors the NirCmd command-line tool expects, then
//! spawns it as a subprocess. Translation is pure and fully validated before
//! any process is launched.
//!
//! # Main Entry Points
//!
//! - [`window`] - Locate windows and act on them (the core translator)
//! - [`keyboard`] - Virtual-key events
//! - [`mouse`] - Cursor positioning and button events
//! - [`system`] - Screenshots, sounds, speech, clipboard, dialogs
//! - [`runner`] - The process invoker boundary
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod keyboard;
pub mod logging;
pub mod mouse;
pub mod runner;
pub mod system;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::PilotConfig;
pub use errors::{ConfigError, PilotError, PilotResult};
pub use keyboard::{EditCombo, KeyAction};
pub use mouse::{ButtonAction, MouseButton};
pub use runner::{RunnerError, UNSUPPORTED_HOST_EXIT_CODE};
pub use system::{Balloon, ScreenRegion, ScreenshotTarget, Speech};
pub use window::{
    ActionSpec, LocatorSpec, ProcessRef, Rect, TitleMatch, WindowAction, WindowError,
    WindowLocator, WindowTarget, WindowVerb,
};

// Re-export handler modules as the primary API
pub use keyboard::handler as keyboard_ops;
pub use mouse::handler as mouse_ops;
pub use system::handler as system_ops;
pub use window::handler as window_ops;

// Re-export logging initialization
pub use logging::init_logging;
