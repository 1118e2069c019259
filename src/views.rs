//! views.rs — derivations from (fixtures, view state) to what a page shows.
//!
//! Every function here is pure and is re-run on each render. Matching rules
//! differ per view on purpose of parity with the shipped UI:
//! - home and podcaster filter on exact show name,
//! - ticker matches by substring on highlight symbols/texts and tags,
//! - tag matches by exact equality.

use serde::Serialize;

use crate::fixtures::Fixtures;
use crate::model::{DemoUser, Direction, Episode, Stock, TickerItem};
use crate::state::{Filter, ViewKind, ViewState};
use crate::theme::Theme;

/// Avatar background used when a podcaster has no episodes.
pub const FALLBACK_COLOR_CLASS: &str = "bg-slate-500";
/// Price label when neither the stock list nor the feed knows the id.
pub const UNKNOWN_PRICE: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowIdentity {
    pub name: String,
    pub avatar: String,
    pub color_class: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeView<'a> {
    pub filter: Filter,
    pub shows: Vec<ShowIdentity>,
    pub episodes: Vec<&'a Episode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PodcasterView<'a> {
    pub name: String,
    pub avatar: String,
    pub color_class: String,
    pub episodes: Vec<&'a Episode>,
}

/// Header figures for a ticker page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerQuote {
    pub display_name: String,
    /// Hidden for feed-only entries such as market indices.
    pub display_symbol: Option<String>,
    pub price: String,
    pub is_up: bool,
    /// Absolute change, only known for stock fixtures.
    pub change: Option<String>,
    /// Absolute percent with two decimals, only known for stock fixtures.
    pub change_percent: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TickerView<'a> {
    pub id: String,
    pub quote: TickerQuote,
    pub episodes: Vec<&'a Episode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagView<'a> {
    pub tag: String,
    pub episodes: Vec<&'a Episode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView<'a> {
    pub user: &'a DemoUser,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsView<'a> {
    pub user: &'a DemoUser,
    pub theme: Theme,
}

/// Result of deriving the active page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum DerivedView<'a> {
    Home(HomeView<'a>),
    Podcaster(PodcasterView<'a>),
    Ticker(TickerView<'a>),
    Tag(TagView<'a>),
    Profile(ProfileView<'a>),
    Settings(SettingsView<'a>),
}

/// Dispatch on the active view kind.
pub fn derive<'a>(fixtures: &'a Fixtures, state: &ViewState) -> DerivedView<'a> {
    let id = state.secondary_id.as_str();
    match state.view {
        ViewKind::Home => DerivedView::Home(home(fixtures, &state.filter)),
        ViewKind::Podcaster => DerivedView::Podcaster(podcaster(fixtures, id)),
        ViewKind::Ticker => DerivedView::Ticker(ticker(fixtures, id)),
        ViewKind::Tag => DerivedView::Tag(tag(fixtures, id)),
        ViewKind::Profile => DerivedView::Profile(ProfileView {
            user: &fixtures.user,
        }),
        ViewKind::Settings => DerivedView::Settings(SettingsView {
            user: &fixtures.user,
            theme: state.theme,
        }),
    }
}

/* ----------------------------
Home
---------------------------- */

pub fn home<'a>(fixtures: &'a Fixtures, filter: &Filter) -> HomeView<'a> {
    let episodes = match filter {
        Filter::All => fixtures.episodes.iter().collect(),
        Filter::Show(name) => fixtures
            .episodes
            .iter()
            .filter(|ep| ep.show_name == *name)
            .collect(),
    };
    HomeView {
        filter: filter.clone(),
        shows: show_identities(&fixtures.episodes),
        episodes,
    }
}

/// Distinct shows in first-seen order.
pub fn show_identities(episodes: &[Episode]) -> Vec<ShowIdentity> {
    let mut out: Vec<ShowIdentity> = Vec::new();
    for ep in episodes {
        if out.iter().any(|s| s.name == ep.show_name) {
            continue;
        }
        out.push(ShowIdentity {
            name: ep.show_name.clone(),
            avatar: ep.show_avatar.clone(),
            color_class: ep.show_color_class.clone(),
        });
    }
    out
}

/* ----------------------------
Podcaster
---------------------------- */

pub fn podcaster<'a>(fixtures: &'a Fixtures, name: &str) -> PodcasterView<'a> {
    let episodes: Vec<&Episode> = fixtures
        .episodes
        .iter()
        .filter(|ep| ep.show_name == name)
        .collect();

    let (avatar, color_class) = match episodes.first() {
        Some(ep) => (ep.show_avatar.clone(), ep.show_color_class.clone()),
        None => (
            name.chars().next().map(String::from).unwrap_or_default(),
            FALLBACK_COLOR_CLASS.to_string(),
        ),
    };

    PodcasterView {
        name: name.to_string(),
        avatar,
        color_class,
        episodes,
    }
}

/* ----------------------------
Ticker
---------------------------- */

pub fn ticker<'a>(fixtures: &'a Fixtures, id: &str) -> TickerView<'a> {
    TickerView {
        id: id.to_string(),
        quote: resolve_quote(&fixtures.stocks, &fixtures.ticker, id),
        episodes: mentioning(&fixtures.episodes, id),
    }
}

/// Episodes with a highlight whose symbol or text contains `id`, or a tag
/// containing `id`. Substring containment, so short ids match broadly.
pub fn mentioning<'a>(episodes: &'a [Episode], id: &str) -> Vec<&'a Episode> {
    episodes
        .iter()
        .filter(|ep| {
            let in_highlights = ep.summary.iter().any(|p| {
                p.highlights.iter().any(|h| {
                    h.symbol.as_deref().is_some_and(|s| s.contains(id)) || h.text.contains(id)
                })
            });
            in_highlights || ep.tags.iter().any(|t| t.contains(id))
        })
        .collect()
}

/// Lookup order: stock list (symbol or name contains `id`), then the feed
/// (exact name), then the bare id.
pub fn resolve_quote(stocks: &[Stock], feed: &[TickerItem], id: &str) -> TickerQuote {
    if let Some(s) = stocks
        .iter()
        .find(|s| s.symbol.contains(id) || s.name.contains(id))
    {
        return TickerQuote {
            display_name: s.name.clone(),
            display_symbol: Some(s.symbol.clone()),
            price: format_number(s.price, 0),
            is_up: s.is_up(),
            change: Some(format!("{}", s.change.abs())),
            change_percent: Some(format!("{:.2}%", s.change_percent.abs())),
        };
    }

    if let Some(t) = feed.iter().find(|t| t.name == id) {
        return TickerQuote {
            display_name: t.name.clone(),
            display_symbol: None,
            price: t.price_label().to_string(),
            is_up: t.direction == Direction::Up,
            change: None,
            change_percent: None,
        };
    }

    TickerQuote {
        display_name: id.to_string(),
        display_symbol: (!id.is_empty()).then(|| id.to_string()),
        price: UNKNOWN_PRICE.to_string(),
        is_up: false,
        change: None,
        change_percent: None,
    }
}

/* ----------------------------
Tag
---------------------------- */

pub fn tag<'a>(fixtures: &'a Fixtures, tag: &str) -> TagView<'a> {
    TagView {
        tag: tag.to_string(),
        episodes: fixtures
            .episodes
            .iter()
            .filter(|ep| ep.tags.iter().any(|t| t == tag))
            .collect(),
    }
}

/* ----------------------------
Formatting
---------------------------- */

/// Group thousands with `,`; at most three fraction digits, at least
/// `min_frac` (e.g. `2450.0` → `"2,450"`, or `"2,450.0"` with `min_frac = 1`).
pub fn format_number(value: f64, min_frac: usize) -> String {
    if !value.is_finite() {
        return UNKNOWN_PRICE.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_frac.min(3) {
        frac.push('0');
    }

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let negative = value < 0.0 && (grouped != "0" || !frac.is_empty());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}
