//! model.rs — records shown by the browsing UI.
//!
//! Everything here is created once at load time and never mutated afterwards.
//! Field names serialize in camelCase so fixture files stay compatible with the
//! front-end mock data they were exported from.

use serde::{Deserialize, Serialize};

/// How a highlighted phrase inside a summary point is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    Stock,
    Bold,
}

/// A phrase inside a summary point, optionally linked to a stock symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Literal substring of the owning point's text.
    pub text: String,
    #[serde(rename = "type")]
    pub kind: HighlightKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPoint {
    pub text: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

impl SummaryPoint {
    pub fn has_highlights(&self) -> bool {
        !self.highlights.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: String,
    pub show_name: String,
    /// Placeholder glyph/initials shown in the avatar tile.
    pub show_avatar: String,
    /// Style classes for the avatar background.
    pub show_color_class: String,
    pub title: String,
    pub time_ago: String,
    #[serde(default)]
    pub is_hot: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: Vec<SummaryPoint>,
}

impl Episode {
    /// True when at least one summary point carries highlights; the card only
    /// shows its "key points" heading in that case.
    pub fn has_key_points(&self) -> bool {
        self.summary.iter().any(SummaryPoint::has_highlights)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    /// Absolute change since previous close.
    pub change: f64,
    pub change_percent: f64,
    /// 0–100, width of the strength bar.
    pub strength: u8,
}

impl Stock {
    pub fn is_up(&self) -> bool {
        self.change > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

/// One entry of the decorative market feed in the top bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerItem {
    pub name: String,
    /// Display string, e.g. "21,850 ▲".
    pub value: String,
    #[serde(rename = "change")]
    pub direction: Direction,
}

impl TickerItem {
    /// The numeric part of `value` (everything before the first space).
    pub fn price_label(&self) -> &str {
        self.value.split(' ').next().unwrap_or_default()
    }
}

/// Fixed demo account shown on the profile and settings pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoUser {
    pub display_name: String,
    pub handle: String,
    pub avatar: String,
    pub email: String,
    pub plan: String,
    pub joined: String,
    #[serde(default)]
    pub followed_shows: Vec<String>,
    #[serde(default)]
    pub watchlist: Vec<String>,
}
