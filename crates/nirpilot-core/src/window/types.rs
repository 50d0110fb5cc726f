//! Window locator and action types.
//!
//! Two layers live here. The typed layer ([`WindowLocator`], [`WindowAction`])
//! is what the argument builders consume: tagged unions with exhaustive
//! matching, no "which field happens to be set" ambiguity. The spec layer
//! ([`LocatorSpec`], [`ActionSpec`]) mirrors the loose wire shape callers may
//! send (optional fields, verb plus optional geometry) and resolves into the
//! typed layer with validation.

use crate::window::errors::WindowError;
use serde::{Deserialize, Serialize};

/// Title comparison strategy for title-based locators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TitleMatch {
    Exact,
    StartsWith,
    EndsWith,
    Contains,
}

impl TitleMatch {
    /// The NirCmd find-token for this match strategy.
    ///
    /// Total over the enum; every strategy has a token.
    pub fn token(&self) -> &'static str {
        match self {
            TitleMatch::Exact => "title",
            TitleMatch::Contains => "ititle",
            TitleMatch::EndsWith => "etitle",
            TitleMatch::StartsWith => "stitle",
        }
    }
}

/// Reference to a process, by numeric id or by executable name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessRef {
    Id(u32),
    Name(String),
}

/// How to find the target window. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowLocator {
    /// The foreground window.
    Active,
    /// Windows whose title matches `value` under the given strategy.
    Title {
        value: String,
        #[serde(rename = "match")]
        match_mode: TitleMatch,
    },
    /// Windows with the given window class name.
    ClassName(String),
    /// Windows belonging to a process.
    Process(ProcessRef),
}

impl WindowLocator {
    /// Exact-title locator, the sugar form for a bare window string.
    pub fn title_exact(value: impl Into<String>) -> Self {
        WindowLocator::Title {
            value: value.into(),
            match_mode: TitleMatch::Exact,
        }
    }
}

impl From<&str> for WindowLocator {
    fn from(value: &str) -> Self {
        WindowLocator::title_exact(value)
    }
}

impl From<String> for WindowLocator {
    fn from(value: String) -> Self {
        WindowLocator::title_exact(value)
    }
}

/// Rectangle payload for geometry-bearing actions.
///
/// All four fields are mandatory; there are no defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The closed set of window action verbs NirCmd understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowVerb {
    Close,
    Activate,
    Flash,
    #[serde(rename = "max")]
    Maximize,
    #[serde(rename = "min")]
    Minimize,
    Normal,
    ToggleMin,
    ToggleMax,
    Center,
    Focus,
    SetSize,
    Move,
}

impl WindowVerb {
    /// The verb token handed to NirCmd.
    pub fn token(&self) -> &'static str {
        match self {
            WindowVerb::Close => "close",
            WindowVerb::Activate => "activate",
            WindowVerb::Flash => "flash",
            WindowVerb::Maximize => "max",
            WindowVerb::Minimize => "min",
            WindowVerb::Normal => "normal",
            WindowVerb::ToggleMin => "togglemin",
            WindowVerb::ToggleMax => "togglemax",
            WindowVerb::Center => "center",
            WindowVerb::Focus => "focus",
            WindowVerb::SetSize => "setsize",
            WindowVerb::Move => "move",
        }
    }

    /// Whether this verb carries a mandatory [`Rect`] payload.
    pub fn requires_rect(&self) -> bool {
        matches!(self, WindowVerb::SetSize | WindowVerb::Move)
    }

    /// All verbs, in token order.
    pub fn all() -> &'static [WindowVerb] {
        &[
            WindowVerb::Close,
            WindowVerb::Activate,
            WindowVerb::Flash,
            WindowVerb::Maximize,
            WindowVerb::Minimize,
            WindowVerb::Normal,
            WindowVerb::ToggleMin,
            WindowVerb::ToggleMax,
            WindowVerb::Center,
            WindowVerb::Focus,
            WindowVerb::SetSize,
            WindowVerb::Move,
        ]
    }
}

impl std::fmt::Display for WindowVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for WindowVerb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowVerb::all()
            .iter()
            .find(|v| v.token() == s.to_lowercase())
            .copied()
            .ok_or_else(|| format!("Unknown window action: {s}"))
    }
}

/// A fully-resolved window action: a simple verb or a geometry verb with its
/// mandatory rectangle. Geometry verbs without a rectangle are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowAction {
    Close,
    Activate,
    Flash,
    Maximize,
    Minimize,
    Normal,
    ToggleMin,
    ToggleMax,
    Center,
    Focus,
    SetSize(Rect),
    Move(Rect),
}

impl WindowAction {
    /// The verb this action performs.
    pub fn verb(&self) -> WindowVerb {
        match self {
            WindowAction::Close => WindowVerb::Close,
            WindowAction::Activate => WindowVerb::Activate,
            WindowAction::Flash => WindowVerb::Flash,
            WindowAction::Maximize => WindowVerb::Maximize,
            WindowAction::Minimize => WindowVerb::Minimize,
            WindowAction::Normal => WindowVerb::Normal,
            WindowAction::ToggleMin => WindowVerb::ToggleMin,
            WindowAction::ToggleMax => WindowVerb::ToggleMax,
            WindowAction::Center => WindowVerb::Center,
            WindowAction::Focus => WindowVerb::Focus,
            WindowAction::SetSize(_) => WindowVerb::SetSize,
            WindowAction::Move(_) => WindowVerb::Move,
        }
    }

    /// The geometry payload, present only for SetSize/Move.
    pub fn rect(&self) -> Option<&Rect> {
        match self {
            WindowAction::SetSize(rect) | WindowAction::Move(rect) => Some(rect),
            _ => None,
        }
    }
}

/// Title sub-object of a [`LocatorSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSpec {
    pub value: String,
    #[serde(rename = "match")]
    pub match_mode: TitleMatch,
}

/// Wire-shaped window locator with optional fields, mirroring the loose
/// `{active?, className?, title?, process?}` object callers may send.
///
/// Callers should set exactly one field. When several are set anyway, the
/// authoritative first-match precedence is active > className > title >
/// process; multi-field specs are deliberately not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(
        default,
        rename = "className",
        skip_serializing_if = "Option::is_none"
    )]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<ProcessRef>,
}

impl LocatorSpec {
    /// Resolve into a typed [`WindowLocator`], applying the documented
    /// field precedence. Fails when no recognized field is populated.
    ///
    /// The presence of `active` is what matters, not its value; `active:
    /// false` still resolves to the active window.
    pub fn resolve(&self) -> Result<WindowLocator, WindowError> {
        if self.active.is_some() {
            return Ok(WindowLocator::Active);
        }
        if let Some(class_name) = &self.class_name {
            return Ok(WindowLocator::ClassName(class_name.clone()));
        }
        if let Some(title) = &self.title {
            return Ok(WindowLocator::Title {
                value: title.value.clone(),
                match_mode: title.match_mode,
            });
        }
        if let Some(process) = &self.process {
            return Ok(WindowLocator::Process(process.clone()));
        }
        Err(WindowError::NoLocatorField)
    }
}

/// Wire-shaped action: a verb plus an optional geometry payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub action: WindowVerb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Rect>,
}

impl ActionSpec {
    /// Resolve into a typed [`WindowAction`].
    ///
    /// Fails when the verb requires a rectangle and none is given. A
    /// rectangle supplied alongside a simple verb is ignored, matching the
    /// reference behavior.
    pub fn resolve(&self) -> Result<WindowAction, WindowError> {
        match self.action {
            WindowVerb::SetSize => self
                .size
                .map(WindowAction::SetSize)
                .ok_or(WindowError::MissingGeometry { verb: self.action }),
            WindowVerb::Move => self
                .size
                .map(WindowAction::Move)
                .ok_or(WindowError::MissingGeometry { verb: self.action }),
            WindowVerb::Close => Ok(WindowAction::Close),
            WindowVerb::Activate => Ok(WindowAction::Activate),
            WindowVerb::Flash => Ok(WindowAction::Flash),
            WindowVerb::Maximize => Ok(WindowAction::Maximize),
            WindowVerb::Minimize => Ok(WindowAction::Minimize),
            WindowVerb::Normal => Ok(WindowAction::Normal),
            WindowVerb::ToggleMin => Ok(WindowAction::ToggleMin),
            WindowVerb::ToggleMax => Ok(WindowAction::ToggleMax),
            WindowVerb::Center => Ok(WindowAction::Center),
            WindowVerb::Focus => Ok(WindowAction::Focus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_match_tokens() {
        assert_eq!(TitleMatch::Exact.token(), "title");
        assert_eq!(TitleMatch::Contains.token(), "ititle");
        assert_eq!(TitleMatch::EndsWith.token(), "etitle");
        assert_eq!(TitleMatch::StartsWith.token(), "stitle");
    }

    #[test]
    fn test_verb_tokens() {
        assert_eq!(WindowVerb::Maximize.token(), "max");
        assert_eq!(WindowVerb::Minimize.token(), "min");
        assert_eq!(WindowVerb::ToggleMin.token(), "togglemin");
        assert_eq!(WindowVerb::SetSize.token(), "setsize");
    }

    #[test]
    fn test_verb_requires_rect() {
        assert!(WindowVerb::SetSize.requires_rect());
        assert!(WindowVerb::Move.requires_rect());
        assert!(!WindowVerb::Close.requires_rect());
        assert!(!WindowVerb::Center.requires_rect());
    }

    #[test]
    fn test_verb_from_str() {
        assert_eq!("min".parse::<WindowVerb>().unwrap(), WindowVerb::Minimize);
        assert_eq!("MAX".parse::<WindowVerb>().unwrap(), WindowVerb::Maximize);
        assert_eq!(
            "togglemax".parse::<WindowVerb>().unwrap(),
            WindowVerb::ToggleMax
        );
        assert!("explode".parse::<WindowVerb>().is_err());
    }

    #[test]
    fn test_locator_from_str_is_exact_title() {
        let locator: WindowLocator = "notepad".into();
        assert_eq!(
            locator,
            WindowLocator::Title {
                value: "notepad".to_string(),
                match_mode: TitleMatch::Exact,
            }
        );
    }

    #[test]
    fn test_locator_spec_resolve_precedence() {
        // All fields set: active wins.
        let spec = LocatorSpec {
            active: Some(true),
            class_name: Some("HD".to_string()),
            title: Some(TitleSpec {
                value: "notepad".to_string(),
                match_mode: TitleMatch::Contains,
            }),
            process: Some(ProcessRef::Id(12)),
        };
        assert_eq!(spec.resolve().unwrap(), WindowLocator::Active);

        // Without active, className wins over title and process.
        let spec = LocatorSpec {
            active: None,
            ..spec
        };
        assert_eq!(
            spec.resolve().unwrap(),
            WindowLocator::ClassName("HD".to_string())
        );

        // Without className, title wins over process.
        let spec = LocatorSpec {
            class_name: None,
            ..spec
        };
        assert_eq!(
            spec.resolve().unwrap(),
            WindowLocator::Title {
                value: "notepad".to_string(),
                match_mode: TitleMatch::Contains,
            }
        );

        // Process is last.
        let spec = LocatorSpec {
            title: None,
            ..spec
        };
        assert_eq!(
            spec.resolve().unwrap(),
            WindowLocator::Process(ProcessRef::Id(12))
        );
    }

    #[test]
    fn test_locator_spec_resolve_empty_fails() {
        let spec = LocatorSpec::default();
        assert!(matches!(spec.resolve(), Err(WindowError::NoLocatorField)));
    }

    #[test]
    fn test_locator_spec_active_false_still_resolves_active() {
        let spec = LocatorSpec {
            active: Some(false),
            ..LocatorSpec::default()
        };
        assert_eq!(spec.resolve().unwrap(), WindowLocator::Active);
    }

    #[test]
    fn test_locator_spec_deserializes_wire_shape() {
        let spec: LocatorSpec =
            serde_json::from_str(r#"{"title":{"value":"notepad","match":"startsWith"}}"#).unwrap();
        assert_eq!(
            spec.resolve().unwrap(),
            WindowLocator::Title {
                value: "notepad".to_string(),
                match_mode: TitleMatch::StartsWith,
            }
        );

        let spec: LocatorSpec = serde_json::from_str(r#"{"process":12}"#).unwrap();
        assert_eq!(
            spec.resolve().unwrap(),
            WindowLocator::Process(ProcessRef::Id(12))
        );

        let spec: LocatorSpec = serde_json::from_str(r#"{"process":"p.exe"}"#).unwrap();
        assert_eq!(
            spec.resolve().unwrap(),
            WindowLocator::Process(ProcessRef::Name("p.exe".to_string()))
        );

        let spec: LocatorSpec = serde_json::from_str(r#"{"className":"HD"}"#).unwrap();
        assert_eq!(
            spec.resolve().unwrap(),
            WindowLocator::ClassName("HD".to_string())
        );
    }

    #[test]
    fn test_action_spec_resolve_simple() {
        let spec = ActionSpec {
            action: WindowVerb::Minimize,
            size: None,
        };
        assert_eq!(spec.resolve().unwrap(), WindowAction::Minimize);
    }

    #[test]
    fn test_action_spec_resolve_geometry() {
        let spec = ActionSpec {
            action: WindowVerb::SetSize,
            size: Some(Rect::new(1, 2, 3, 4)),
        };
        assert_eq!(
            spec.resolve().unwrap(),
            WindowAction::SetSize(Rect::new(1, 2, 3, 4))
        );
    }

    #[test]
    fn test_action_spec_missing_geometry_fails() {
        for verb in [WindowVerb::SetSize, WindowVerb::Move] {
            let spec = ActionSpec {
                action: verb,
                size: None,
            };
            assert!(matches!(
                spec.resolve(),
                Err(WindowError::MissingGeometry { .. })
            ));
        }
    }

    #[test]
    fn test_action_spec_ignores_rect_on_simple_verb() {
        let spec = ActionSpec {
            action: WindowVerb::Flash,
            size: Some(Rect::new(1, 2, 3, 4)),
        };
        assert_eq!(spec.resolve().unwrap(), WindowAction::Flash);
    }

    #[test]
    fn test_action_spec_deserializes_verb_tokens() {
        let spec: ActionSpec = serde_json::from_str(r#"{"action":"max"}"#).unwrap();
        assert_eq!(spec.action, WindowVerb::Maximize);

        let spec: ActionSpec =
            serde_json::from_str(r#"{"action":"move","size":{"x":1,"y":1,"width":100,"height":100}}"#)
                .unwrap();
        assert_eq!(
            spec.resolve().unwrap(),
            WindowAction::Move(Rect::new(1, 1, 100, 100))
        );
    }

    #[test]
    fn test_action_rect_accessor() {
        assert_eq!(WindowAction::Close.rect(), None);
        assert_eq!(
            WindowAction::Move(Rect::new(5, 6, 7, 8)).rect(),
            Some(&Rect::new(5, 6, 7, 8))
        );
    }
}
