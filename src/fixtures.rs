//! # Fixtures
//!
//! Static content standing in for a backend: episodes, related stocks, the
//! top-bar market feed and the demo account.
//!
//! - Built-in seed via `Fixtures::default_seed()`.
//! - Optional JSON override file; anything unreadable falls back to the seed.

use serde::Deserialize;
use std::{fs, path::Path};
use tracing::warn;

use crate::model::{
    DemoUser, Direction, Episode, Highlight, HighlightKind, Stock, SummaryPoint, TickerItem,
};

/// All content the UI can show. Immutable after load.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixtures {
    pub episodes: Vec<Episode>,
    #[serde(default)]
    pub stocks: Vec<Stock>,
    #[serde(default)]
    pub ticker: Vec<TickerItem>,
    #[serde(default = "default_user")]
    pub user: DemoUser,
}

impl Fixtures {
    /// Load fixtures from a JSON file.
    /// Falls back to `default_seed()` when the file is missing or malformed.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!(target: "trendbrief", path = %path.display(), error = %e, "fixture file malformed, using seed");
                Self::default_seed()
            }),
            Err(e) => {
                warn!(target: "trendbrief", path = %path.display(), error = %e, "fixture file unreadable, using seed");
                Self::default_seed()
            }
        }
    }

    /// Seed data when no path is configured, otherwise the file at `path`.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Self::default_seed(),
        }
    }

    /// Built-in content shipped with the binary.
    pub fn default_seed() -> Self {
        Self {
            episodes: seed_episodes(),
            stocks: seed_stocks(),
            ticker: seed_ticker(),
            user: default_user(),
        }
    }
}

fn seed_ticker() -> Vec<TickerItem> {
    [
        ("加權", "21,850 ▲", Direction::Up),
        ("櫃買", "250.3 ▼", Direction::Down),
        ("NVDA", "118.5 ▲", Direction::Up),
        ("TSM", "172.0 ▲", Direction::Up),
        ("AAPL", "216.4 ▼", Direction::Down),
    ]
    .into_iter()
    .map(|(name, value, direction)| TickerItem {
        name: name.to_string(),
        value: value.to_string(),
        direction,
    })
    .collect()
}

fn seed_stocks() -> Vec<Stock> {
    [
        ("2382.TW", "廣達", 285.5, 12.0, 4.38, 75),
        ("3017.TW", "奇鋐", 620.0, 35.0, 5.98, 85),
        ("3008.TW", "大立光", 2450.0, -20.0, -0.81, 25),
    ]
    .into_iter()
    .map(|(symbol, name, price, change, change_percent, strength)| Stock {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        change_percent,
        strength,
    })
    .collect()
}

fn stock_highlight(text: &str, symbol: &str) -> Highlight {
    Highlight {
        text: text.to_string(),
        kind: HighlightKind::Stock,
        symbol: Some(symbol.to_string()),
    }
}

fn seed_episodes() -> Vec<Episode> {
    vec![
        Episode {
            id: "1".into(),
            show_name: "股癌 Gooaye".into(),
            show_avatar: "IMG".into(),
            show_color_class: "bg-slate-200 dark:bg-slate-800 text-slate-500".into(),
            title: "EP452 輝達供應鏈大風吹？散熱族群怎麼看".into(),
            time_ago: "2小時前".into(),
            is_hot: true,
            tags: vec!["#AI伺服器".into(), "#散熱".into()],
            summary: vec![
                SummaryPoint {
                    text: "提到奇鋐 (3017) 近期營收表現優於預期，主要受惠於 3D VC 需求強勁。".into(),
                    highlights: vec![stock_highlight("奇鋐 (3017)", "3017")],
                },
                SummaryPoint {
                    text: "針對廣達 (2382) 看法正向，認為 AI 伺服器訂單能見度高。".into(),
                    highlights: vec![stock_highlight("廣達 (2382)", "2382")],
                },
            ],
        },
        Episode {
            id: "2".into(),
            show_name: "財報狗".into(),
            show_avatar: "狗".into(),
            show_color_class:
                "bg-indigo-50 dark:bg-indigo-900/20 text-indigo-600 dark:text-indigo-400".into(),
            title: "航運股還有戲嗎？紅海危機解析".into(),
            time_ago: "昨天".into(),
            is_hot: false,
            tags: vec!["#航運".into(), "#宏觀".into()],
            summary: vec![SummaryPoint {
                text: "針對近期紅海危機造成的運價上漲進行分析，是否為短期現象？長榮、陽明操作策略分享..."
                    .into(),
                highlights: Vec::new(),
            }],
        },
    ]
}

fn default_user() -> DemoUser {
    DemoUser {
        display_name: "投資新手小明".into(),
        handle: "@ming_invests".into(),
        avatar: "明".into(),
        email: "demo@trendbrief.com".into(),
        plan: "Free".into(),
        joined: "2024 年 3 月加入".into(),
        followed_shows: vec!["股癌 Gooaye".into(), "財報狗".into()],
        watchlist: vec!["2382.TW".into(), "3017.TW".into()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn seed_has_expected_shape() {
        let f = Fixtures::default_seed();
        assert_eq!(f.episodes.len(), 2);
        assert_eq!(f.stocks.len(), 3);
        assert_eq!(f.ticker.len(), 5);
        assert_eq!(f.episodes[0].show_name, "股癌 Gooaye");
    }

    #[test]
    fn seed_highlights_are_substrings_of_their_points() {
        let f = Fixtures::default_seed();
        for ep in &f.episodes {
            for p in &ep.summary {
                for h in &p.highlights {
                    assert!(p.text.contains(&h.text), "{} not in {}", h.text, p.text);
                }
            }
        }
    }

    #[test]
    fn missing_file_falls_back_to_seed() {
        let f = Fixtures::load_from_file("definitely/not/here.json");
        assert_eq!(f.episodes.len(), 2);
    }

    #[test]
    fn file_override_is_used() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"{{ "episodes": [{{ "id": "x", "showName": "A", "showAvatar": "A",
                 "showColorClass": "", "title": "t", "timeAgo": "now" }}] }}"#
        )
        .unwrap();
        let f = Fixtures::load(Some(tmp.path()));
        assert_eq!(f.episodes.len(), 1);
        assert!(f.stocks.is_empty());
        assert_eq!(f.user.email, "demo@trendbrief.com");
    }

    #[test]
    fn malformed_file_falls_back_to_seed() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "not json").unwrap();
        let f = Fixtures::load_from_file(tmp.path());
        assert_eq!(f.episodes.len(), 2);
    }
}
