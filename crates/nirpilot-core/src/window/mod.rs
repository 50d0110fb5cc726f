//! Window subsystem: locate a window and act on it.
//!
//! The translation pipeline is `LocatorSpec`/`ActionSpec` (wire shape) →
//! `WindowLocator`/`WindowAction` (typed) → `operations::build_window_args`
//! (token vector) → `handler::window_action` (prefix `win`, invoke).

pub mod errors;
pub mod finder;
pub mod handler;
pub mod operations;
pub mod types;

// Re-export commonly used types and functions
pub use errors::WindowError;
pub use finder::{
    WindowTarget, active_window, by_class_name, by_process_id, by_process_name, by_title_contains,
    by_title_ends_with, by_title_exact, by_title_starts_with,
};
pub use handler::{window_action, window_command};
pub use operations::build_window_args;
pub use types::{
    ActionSpec, LocatorSpec, ProcessRef, Rect, TitleMatch, TitleSpec, WindowAction, WindowLocator,
    WindowVerb,
};
