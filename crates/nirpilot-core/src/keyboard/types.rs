use serde::{Deserialize, Serialize};

/// What to do with a key: a full press, or the down/up halves separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAction {
    Press,
    Down,
    Up,
}

impl KeyAction {
    /// The NirCmd `sendkey` action token.
    pub fn token(&self) -> &'static str {
        match self {
            KeyAction::Press => "press",
            KeyAction::Down => "down",
            KeyAction::Up => "up",
        }
    }
}

impl std::fmt::Display for KeyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for KeyAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "press" => Ok(KeyAction::Press),
            "down" => Ok(KeyAction::Down),
            "up" => Ok(KeyAction::Up),
            _ => Err(format!("Unknown key action: {s}")),
        }
    }
}

/// The Ctrl-modified editing shortcuts.
///
/// These are the only fixed key combinations NirCmd callers routinely need;
/// arbitrary character typing is a lookup concern left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditCombo {
    Cut,
    Copy,
    Paste,
    SelectAll,
}

impl EditCombo {
    /// The virtual-key code pressed while Ctrl is held.
    pub fn key_code(&self) -> u16 {
        match self {
            EditCombo::Cut => 0x58,       // X
            EditCombo::Copy => 0x43,      // C
            EditCombo::Paste => 0x56,     // V
            EditCombo::SelectAll => 0x41, // A
        }
    }
}
