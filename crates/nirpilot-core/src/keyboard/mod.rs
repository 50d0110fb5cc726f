//! Keyboard subsystem: send virtual-key events through NirCmd's `sendkey`.
//!
//! Character-to-keycode mapping is deliberately out of scope; callers pass
//! Windows virtual-key codes directly.

pub mod handler;
pub mod operations;
pub mod types;

pub use handler::{copy, cut, paste, select_all, send_combo, send_key};
pub use operations::{build_combo_sequence, build_send_key_args};
pub use types::{EditCombo, KeyAction};
