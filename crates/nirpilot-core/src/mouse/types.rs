use serde::{Deserialize, Serialize};

/// Mouse button selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// The NirCmd `sendmouse` button token.
    pub fn token(&self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
            MouseButton::Middle => "middle",
        }
    }
}

impl std::fmt::Display for MouseButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for MouseButton {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(MouseButton::Left),
            "right" => Ok(MouseButton::Right),
            "middle" => Ok(MouseButton::Middle),
            _ => Err(format!("Unknown mouse button: {s}")),
        }
    }
}

/// What to do with a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAction {
    Down,
    Up,
    Click,
    #[serde(rename = "dblclick")]
    DoubleClick,
}

impl ButtonAction {
    /// The NirCmd `sendmouse` action token.
    pub fn token(&self) -> &'static str {
        match self {
            ButtonAction::Down => "down",
            ButtonAction::Up => "up",
            ButtonAction::Click => "click",
            ButtonAction::DoubleClick => "dblclick",
        }
    }
}

impl std::fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for ButtonAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "down" => Ok(ButtonAction::Down),
            "up" => Ok(ButtonAction::Up),
            "click" => Ok(ButtonAction::Click),
            "dblclick" | "doubleclick" => Ok(ButtonAction::DoubleClick),
            _ => Err(format!("Unknown mouse button action: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_tokens() {
        assert_eq!(MouseButton::Left.token(), "left");
        assert_eq!(MouseButton::Right.token(), "right");
        assert_eq!(MouseButton::Middle.token(), "middle");
    }

    #[test]
    fn test_button_action_tokens() {
        assert_eq!(ButtonAction::Click.token(), "click");
        assert_eq!(ButtonAction::DoubleClick.token(), "dblclick");
    }

    #[test]
    fn test_button_action_from_str_accepts_both_spellings() {
        assert_eq!(
            "dblclick".parse::<ButtonAction>().unwrap(),
            ButtonAction::DoubleClick
        );
        assert_eq!(
            "doubleclick".parse::<ButtonAction>().unwrap(),
            ButtonAction::DoubleClick
        );
    }
}
