//! state.rs — the single view-state container.
//!
//! `Session` is the only writer of navigation, filter, theme and menu state.
//! The router keeps it behind one lock; every setter is total.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::metrics;
use crate::theme::{Theme, ThemeController};

/// Which page the main area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    #[default]
    Home,
    Podcaster,
    Ticker,
    Tag,
    Profile,
    Settings,
}

impl ViewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Home => "home",
            ViewKind::Podcaster => "podcaster",
            ViewKind::Ticker => "ticker",
            ViewKind::Tag => "tag",
            ViewKind::Profile => "profile",
            ViewKind::Settings => "settings",
        }
    }
}

/// Home feed filter: everything, or one show by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Filter {
    #[default]
    All,
    Show(String),
}

impl Filter {
    /// Sentinel string for [`Filter::All`].
    pub const ALL: &'static str = "All";

    pub fn parse(raw: &str) -> Self {
        if raw == Self::ALL {
            Filter::All
        } else {
            Filter::Show(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => Self::ALL,
            Filter::Show(s) => s,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

impl From<String> for Filter {
    fn from(s: String) -> Self {
        Filter::parse(&s)
    }
}

impl From<Filter> for String {
    fn from(f: Filter) -> Self {
        f.as_str().to_string()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of what the UI is showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub view: ViewKind,
    /// Podcaster name, ticker symbol/name or tag, depending on `view`.
    pub secondary_id: String,
    pub filter: Filter,
    pub theme: Theme,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            view: ViewKind::Home,
            secondary_id: String::new(),
            filter: Filter::All,
            theme: Theme::Light,
        }
    }
}

/// Owner of the view state plus the header chrome state.
#[derive(Debug)]
pub struct Session {
    view: ViewState,
    theme: ThemeController,
    menu_open: bool,
}

impl Session {
    pub fn new(theme: ThemeController) -> Self {
        let view = ViewState {
            theme: theme.theme(),
            ..ViewState::default()
        };
        Self {
            view,
            theme,
            menu_open: false,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn theme_controller(&self) -> &ThemeController {
        &self.theme
    }

    /// Switch pages. The caller resets scroll to the top of the document;
    /// any open dropdown is closed since this is an outside interaction.
    pub fn navigate(&mut self, kind: ViewKind, secondary_id: Option<&str>) {
        self.view.view = kind;
        self.view.secondary_id = secondary_id.unwrap_or_default().to_string();
        self.menu_open = false;
        metrics::record_navigation(kind);
        debug!(
            target: "trendbrief",
            view = kind.as_str(),
            id = %self.view.secondary_id,
            "navigate"
        );
    }

    pub fn set_filter(&mut self, value: Filter) {
        debug!(target: "trendbrief", filter = %value, "filter");
        self.view.filter = value;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let t = self.theme.toggle();
        self.view.theme = t;
        metrics::record_theme_toggle(t);
        t
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
