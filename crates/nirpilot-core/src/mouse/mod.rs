//! Mouse subsystem: cursor positioning and button events via NirCmd.

pub mod handler;
pub mod operations;
pub mod types;

pub use handler::{send_button, set_cursor};
pub use operations::{build_send_mouse_args, build_set_cursor_args};
pub use types::{ButtonAction, MouseButton};
