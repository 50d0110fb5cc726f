//! Fluent window-targeting API.
//!
//! A [`WindowTarget`] pairs a locator with a config so call sites read as
//! `by_title_exact("myfile.txt").minimize()`. Each action method is a thin
//! wrapper over [`handler::window_action`].

use crate::config::PilotConfig;
use crate::window::errors::WindowError;
use crate::window::handler;
use crate::window::types::{ProcessRef, Rect, TitleMatch, WindowAction, WindowLocator};

/// A located window (or set of windows) ready to receive actions.
#[derive(Debug, Clone)]
pub struct WindowTarget {
    locator: WindowLocator,
    config: PilotConfig,
}

/// Target windows whose title equals `title`.
pub fn by_title_exact(title: impl Into<String>) -> WindowTarget {
    WindowTarget::new(WindowLocator::Title {
        value: title.into(),
        match_mode: TitleMatch::Exact,
    })
}

/// Target windows whose title contains `title`.
pub fn by_title_contains(title: impl Into<String>) -> WindowTarget {
    WindowTarget::new(WindowLocator::Title {
        value: title.into(),
        match_mode: TitleMatch::Contains,
    })
}

/// Target windows whose title starts with `title`.
pub fn by_title_starts_with(title: impl Into<String>) -> WindowTarget {
    WindowTarget::new(WindowLocator::Title {
        value: title.into(),
        match_mode: TitleMatch::StartsWith,
    })
}

/// Target windows whose title ends with `title`.
pub fn by_title_ends_with(title: impl Into<String>) -> WindowTarget {
    WindowTarget::new(WindowLocator::Title {
        value: title.into(),
        match_mode: TitleMatch::EndsWith,
    })
}

/// Target windows by window class name.
pub fn by_class_name(class_name: impl Into<String>) -> WindowTarget {
    WindowTarget::new(WindowLocator::ClassName(class_name.into()))
}

/// Target windows owned by the named process (e.g. `notepad.exe`).
pub fn by_process_name(process_name: impl Into<String>) -> WindowTarget {
    WindowTarget::new(WindowLocator::Process(ProcessRef::Name(process_name.into())))
}

/// Target windows owned by the process with the given id.
pub fn by_process_id(process_id: u32) -> WindowTarget {
    WindowTarget::new(WindowLocator::Process(ProcessRef::Id(process_id)))
}

/// Target the foreground window.
pub fn active_window() -> WindowTarget {
    WindowTarget::new(WindowLocator::Active)
}

impl WindowTarget {
    pub fn new(locator: WindowLocator) -> Self {
        Self {
            locator,
            config: PilotConfig::default(),
        }
    }

    /// Use an explicit config instead of the defaults.
    pub fn with_config(mut self, config: PilotConfig) -> Self {
        self.config = config;
        self
    }

    /// The locator this target resolves windows with.
    pub fn locator(&self) -> &WindowLocator {
        &self.locator
    }

    fn act(&self, action: WindowAction) -> Result<i32, WindowError> {
        handler::window_action(&self.locator, &action, &self.config)
    }

    pub fn close(&self) -> Result<i32, WindowError> {
        self.act(WindowAction::Close)
    }

    pub fn activate(&self) -> Result<i32, WindowError> {
        self.act(WindowAction::Activate)
    }

    pub fn flash(&self) -> Result<i32, WindowError> {
        self.act(WindowAction::Flash)
    }

    pub fn maximize(&self) -> Result<i32, WindowError> {
        self.act(WindowAction::Maximize)
    }

    pub fn minimize(&self) -> Result<i32, WindowError> {
        self.act(WindowAction::Minimize)
    }

    /// Restore the window to its normal state.
    pub fn normal(&self) -> Result<i32, WindowError> {
        self.act(WindowAction::Normal)
    }

    pub fn toggle_min(&self) -> Result<i32, WindowError> {
        self.act(WindowAction::ToggleMin)
    }

    pub fn toggle_max(&self) -> Result<i32, WindowError> {
        self.act(WindowAction::ToggleMax)
    }

    pub fn center(&self) -> Result<i32, WindowError> {
        self.act(WindowAction::Center)
    }

    pub fn focus(&self) -> Result<i32, WindowError> {
        self.act(WindowAction::Focus)
    }

    /// Move the window to `(x, y)` and resize it to `width` x `height`.
    pub fn set_size(&self, x: i32, y: i32, width: i32, height: i32) -> Result<i32, WindowError> {
        self.act(WindowAction::SetSize(Rect::new(x, y, width, height)))
    }

    /// Move/resize the window by the given deltas.
    pub fn move_by(&self, x: i32, y: i32, width: i32, height: i32) -> Result<i32, WindowError> {
        self.act(WindowAction::Move(Rect::new(x, y, width, height)))
    }
}
