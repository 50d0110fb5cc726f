//! Argument building for mouse input.

use crate::mouse::types::{ButtonAction, MouseButton};

/// Build the `setcursor` argument vector for absolute screen coordinates.
pub fn build_set_cursor_args(x: i32, y: i32) -> Vec<String> {
    vec!["setcursor".to_string(), x.to_string(), y.to_string()]
}

/// Build the `sendmouse` argument vector for a button event.
pub fn build_send_mouse_args(button: MouseButton, action: ButtonAction) -> Vec<String> {
    vec![
        "sendmouse".to_string(),
        button.token().to_string(),
        action.token().to_string(),
    ]
}
