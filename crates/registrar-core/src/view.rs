//! Screen selection and the assistant overlay flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Dashboard,
    LiveFeed,
}

impl View {
    /// The other screen.
    pub fn other(self) -> Self {
        match self {
            View::Dashboard => View::LiveFeed,
            View::LiveFeed => View::Dashboard,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Dashboard => f.write_str("dashboard"),
            View::LiveFeed => f.write_str("live-feed"),
        }
    }
}

/// Tracks the current screen and whether the assistant is drawn on top of it.
///
/// The overlay flag is independent of the screen: opening or closing the
/// assistant never changes [`ViewRouter::current`].
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    current: View,
    assistant_open: bool,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Flips between dashboard and live feed and returns the new screen.
    pub fn toggle(&mut self) -> View {
        self.current = self.current.other();
        self.current
    }

    pub fn is_assistant_open(&self) -> bool {
        self.assistant_open
    }

    pub fn open_assistant(&mut self) {
        self.assistant_open = true;
    }

    pub fn close_assistant(&mut self) {
        self.assistant_open = false;
    }
}
