//! Argument building for keyboard input.

use crate::keyboard::types::{EditCombo, KeyAction};

/// Virtual-key code of the Ctrl modifier.
pub const VK_CONTROL: u16 = 0x11;

/// Build the `sendkey` argument vector for a virtual-key code.
///
/// The code is emitted as lowercase hex with a `0x` prefix, which NirCmd
/// accepts for any virtual key.
pub fn build_send_key_args(key_code: u16, action: KeyAction) -> Vec<String> {
    vec![
        "sendkey".to_string(),
        format!("0x{key_code:x}"),
        action.token().to_string(),
    ]
}

/// Build the three-invocation `sendkey` sequence for a Ctrl combo:
/// Ctrl down, the letter pressed, Ctrl up.
pub fn build_combo_sequence(combo: EditCombo) -> Vec<Vec<String>> {
    vec![
        build_send_key_args(VK_CONTROL, KeyAction::Down),
        build_send_key_args(combo.key_code(), KeyAction::Press),
        build_send_key_args(VK_CONTROL, KeyAction::Up),
    ]
}
