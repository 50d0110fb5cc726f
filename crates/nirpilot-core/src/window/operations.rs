//! Pure translation from window locators/actions to NirCmd argument vectors.
//!
//! Nothing here performs I/O or holds state: every function is a deterministic
//! mapping from a validated input to a token sequence, and every validation
//! failure is reported before a single token could reach the process invoker.

use crate::window::errors::WindowError;
use crate::window::types::{ProcessRef, WindowAction, WindowLocator};

/// Whether a required string value is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn ensure_not_blank(value: &str, field: &'static str) -> Result<(), WindowError> {
    if is_blank(value) {
        return Err(WindowError::BlankValue { field });
    }
    Ok(())
}

/// Build the locator sub-sequence of the argument vector.
///
/// Emits `[title, v]`, `[active]`, `[class, v]`, `[<match-token>, v]` or
/// `[process, v]`. A numeric process id serializes as `/<id>`; a process
/// name is passed verbatim.
pub fn locator_args(locator: &WindowLocator) -> Result<Vec<String>, WindowError> {
    match locator {
        WindowLocator::Active => Ok(vec!["active".to_string()]),
        WindowLocator::ClassName(class_name) => {
            ensure_not_blank(class_name, "className")?;
            Ok(vec!["class".to_string(), class_name.clone()])
        }
        WindowLocator::Title { value, match_mode } => {
            ensure_not_blank(value, "title.value")?;
            Ok(vec![match_mode.token().to_string(), value.clone()])
        }
        WindowLocator::Process(ProcessRef::Id(id)) => {
            Ok(vec!["process".to_string(), format!("/{id}")])
        }
        WindowLocator::Process(ProcessRef::Name(name)) => {
            ensure_not_blank(name, "process")?;
            Ok(vec!["process".to_string(), name.clone()])
        }
    }
}

/// Build the action sub-sequence: the verb token, then geometry tokens for
/// SetSize/Move. Numbers are plain base-10 decimals, sign kept.
pub fn action_args(action: &WindowAction) -> Vec<String> {
    let mut args = vec![action.verb().token().to_string()];
    args.extend(geometry_args(action));
    args
}

/// The geometry tokens of an action, in `x y width height` order.
/// Empty for simple verbs.
pub fn geometry_args(action: &WindowAction) -> Vec<String> {
    match action.rect() {
        Some(rect) => vec![
            rect.x.to_string(),
            rect.y.to_string(),
            rect.width.to_string(),
            rect.height.to_string(),
        ],
        None => Vec::new(),
    }
}

/// Assemble the full window argument vector.
///
/// Token order is fixed: `[verb, locator.., geometry..]`. The caller prefixes
/// the `win` subsystem verb before handing the vector to the runner.
pub fn build_window_args(
    locator: &WindowLocator,
    action: &WindowAction,
) -> Result<Vec<String>, WindowError> {
    let mut args = Vec::with_capacity(7);
    args.push(action.verb().token().to_string());
    args.extend(locator_args(locator)?);
    args.extend(geometry_args(action));
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::types::{LocatorSpec, Rect, TitleMatch, TitleSpec};

    fn build(locator: WindowLocator, action: WindowAction) -> Vec<String> {
        build_window_args(&locator, &action).unwrap()
    }

    #[test]
    fn test_build_args_bare_string() {
        let args = build("notepad".into(), WindowAction::Minimize);
        assert_eq!(args, vec!["min", "title", "notepad"]);
    }

    #[test]
    fn test_build_args_active() {
        let args = build(WindowLocator::Active, WindowAction::Minimize);
        assert_eq!(args, vec!["min", "active"]);
    }

    #[test]
    fn test_build_args_class_name() {
        let args = build(
            WindowLocator::ClassName("HD".to_string()),
            WindowAction::Minimize,
        );
        assert_eq!(args, vec!["min", "class", "HD"]);
    }

    #[test]
    fn test_build_args_process_id_slash_prefixed() {
        let args = build(
            WindowLocator::Process(ProcessRef::Id(12)),
            WindowAction::Minimize,
        );
        assert_eq!(args, vec!["min", "process", "/12"]);
    }

    #[test]
    fn test_build_args_process_name_verbatim() {
        let args = build(
            WindowLocator::Process(ProcessRef::Name("p.exe".to_string())),
            WindowAction::Minimize,
        );
        assert_eq!(args, vec!["min", "process", "p.exe"]);
    }

    #[test]
    fn test_build_args_title_match_modes() {
        let cases = [
            (TitleMatch::Exact, "title"),
            (TitleMatch::Contains, "ititle"),
            (TitleMatch::EndsWith, "etitle"),
            (TitleMatch::StartsWith, "stitle"),
        ];
        for (match_mode, token) in cases {
            let args = build(
                WindowLocator::Title {
                    value: "notepad".to_string(),
                    match_mode,
                },
                WindowAction::Minimize,
            );
            assert_eq!(args, vec!["min", token, "notepad"]);
        }
    }

    #[test]
    fn test_build_args_setsize_token_order() {
        let args = build(
            "notepad".into(),
            WindowAction::SetSize(Rect::new(1, 2, 3, 4)),
        );
        assert_eq!(args, vec!["setsize", "title", "notepad", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_build_args_move_with_locator_between_verb_and_geometry() {
        let args = build(
            WindowLocator::Title {
                value: "notepad".to_string(),
                match_mode: TitleMatch::Contains,
            },
            WindowAction::Move(Rect::new(5, 6, 7, 8)),
        );
        assert_eq!(args, vec!["move", "ititle", "notepad", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_negative_geometry_keeps_sign() {
        let args = build(
            "notepad".into(),
            WindowAction::Move(Rect::new(-100, -50, 640, 480)),
        );
        assert_eq!(
            args,
            vec!["move", "title", "notepad", "-100", "-50", "640", "480"]
        );
    }

    #[test]
    fn test_blank_bare_string_fails() {
        for value in ["", "  ", "\t\n"] {
            let result = build_window_args(&value.into(), &WindowAction::Minimize);
            assert!(matches!(result, Err(WindowError::BlankValue { .. })));
        }
    }

    #[test]
    fn test_blank_class_name_fails() {
        let result = build_window_args(
            &WindowLocator::ClassName(String::new()),
            &WindowAction::Minimize,
        );
        assert!(matches!(
            result,
            Err(WindowError::BlankValue { field: "className" })
        ));
    }

    #[test]
    fn test_blank_process_name_fails() {
        let result = build_window_args(
            &WindowLocator::Process(ProcessRef::Name(String::new())),
            &WindowAction::Minimize,
        );
        assert!(matches!(
            result,
            Err(WindowError::BlankValue { field: "process" })
        ));
    }

    #[test]
    fn test_blank_title_value_fails() {
        let result = build_window_args(
            &WindowLocator::Title {
                value: "  ".to_string(),
                match_mode: TitleMatch::Contains,
            },
            &WindowAction::Minimize,
        );
        assert!(matches!(
            result,
            Err(WindowError::BlankValue {
                field: "title.value"
            })
        ));
    }

    #[test]
    fn test_idempotent_translation() {
        let locator: WindowLocator = "notepad".into();
        let action = WindowAction::SetSize(Rect::new(1, 2, 3, 4));

        let first = build_window_args(&locator, &action).unwrap();
        let second = build_window_args(&locator, &action).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_spec_roundtrip_matches_reference_vectors() {
        // Wire-shaped input resolved then built, covering the original
        // string|object union end to end.
        let locator = LocatorSpec {
            title: Some(TitleSpec {
                value: "notepad".to_string(),
                match_mode: TitleMatch::EndsWith,
            }),
            ..LocatorSpec::default()
        }
        .resolve()
        .unwrap();
        let args = build(locator, WindowAction::Minimize);
        assert_eq!(args, vec!["min", "etitle", "notepad"]);
    }

    #[test]
    fn test_action_args_alone() {
        assert_eq!(action_args(&WindowAction::Flash), vec!["flash"]);
        assert_eq!(
            action_args(&WindowAction::SetSize(Rect::new(1, 2, 3, 4))),
            vec!["setsize", "1", "2", "3", "4"]
        );
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\r\n"));
        assert!(!is_blank("notepad"));
        assert!(!is_blank(" x "));
    }
}
