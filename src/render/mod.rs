//! # Rendering
//!
//! Turns derived views into HTML. Components never own state: they read
//! the view snapshot and emit navigation intents as links to the routes in
//! `api`. Every piece of fixture text goes through `text()` / `attr()`.

pub mod episode_card;
pub mod footer;
pub mod header;
pub mod pages;
pub mod stock_widget;

use std::borrow::Cow;

use crate::fixtures::Fixtures;
use crate::state::{Filter, ViewState};
use crate::views;

/// Escape for element content.
pub(crate) fn text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escape for a double-quoted attribute value.
pub(crate) fn attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Navigation intents as hrefs.
pub mod links {
    use super::Filter;

    pub const HOME: &str = "/home";
    pub const PROFILE: &str = "/profile";
    pub const SETTINGS: &str = "/settings";
    pub const THEME_TOGGLE: &str = "/theme/toggle";
    pub const MENU_TOGGLE: &str = "/menu/toggle";
    pub const SEARCH: &str = "/search";

    pub fn podcaster(name: &str) -> String {
        format!("/podcaster/{}", urlencoding::encode(name))
    }

    pub fn ticker(id: &str) -> String {
        format!("/ticker/{}", urlencoding::encode(id))
    }

    pub fn tag(tag: &str) -> String {
        format!("/tag/{}", urlencoding::encode(tag))
    }

    pub fn filter(f: &Filter) -> String {
        format!("/filter/{}", urlencoding::encode(f.as_str()))
    }
}

/// Full document for the current state.
pub fn page(fixtures: &Fixtures, state: &ViewState, menu_open: bool) -> String {
    let derived = views::derive(fixtures, state);
    let main = pages::main_content(&derived);
    let sidebar = stock_widget::sidebar(&fixtures.stocks);

    let mut out = String::with_capacity(16 * 1024);
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!(
        "<html lang=\"zh-Hant\" class=\"{}\">\n",
        state.theme.root_class()
    ));
    out.push_str(
        "<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>TrendBrief</title>\n\
         <script src=\"https://cdn.tailwindcss.com\"></script>\n\
         <script>tailwind.config = { darkMode: 'class' }</script>\n\
         </head>\n",
    );
    out.push_str(
        "<body id=\"top\" class=\"bg-slate-50 text-slate-900 dark:bg-slate-950 dark:text-slate-100 min-h-screen flex flex-col\">\n",
    );
    out.push_str(&header::header(&fixtures.ticker, state.theme, menu_open, &fixtures.user));
    out.push_str(
        "<div class=\"max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 flex-1 w-full\">\n\
         <div class=\"grid grid-cols-1 lg:grid-cols-12 gap-8\">\n\
         <main class=\"lg:col-span-8\">\n",
    );
    out.push_str(&main);
    out.push_str("</main>\n<aside class=\"hidden lg:block lg:col-span-4 space-y-6\">\n<div class=\"sticky top-24 space-y-6\">\n");
    out.push_str(&sidebar);
    out.push_str("</div>\n</aside>\n</div>\n</div>\n");
    out.push_str(footer::FOOTER);
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ViewKind;
    use crate::theme::Theme;

    #[test]
    fn links_are_percent_encoded() {
        assert_eq!(links::tag("#航運"), "/tag/%23%E8%88%AA%E9%81%8B");
        assert_eq!(links::podcaster("股癌 Gooaye"), "/podcaster/%E8%82%A1%E7%99%8C%20Gooaye");
        assert_eq!(links::filter(&Filter::All), "/filter/All");
    }

    #[test]
    fn escaping() {
        assert_eq!(text("<b>&"), "&lt;b&gt;&amp;");
        assert_eq!(attr("a\"b"), "a&quot;b");
    }

    #[test]
    fn dark_theme_sets_root_class() {
        let f = Fixtures::default_seed();
        let state = ViewState {
            theme: Theme::Dark,
            ..ViewState::default()
        };
        let html = page(&f, &state, false);
        assert!(html.contains("<html lang=\"zh-Hant\" class=\"dark\">"));

        let light = page(&f, &ViewState::default(), false);
        assert!(light.contains("<html lang=\"zh-Hant\" class=\"\">"));
    }

    #[test]
    fn page_renders_every_view_kind() {
        let f = Fixtures::default_seed();
        for (kind, id) in [
            (ViewKind::Home, ""),
            (ViewKind::Podcaster, "財報狗"),
            (ViewKind::Ticker, "3017"),
            (ViewKind::Tag, "#散熱"),
            (ViewKind::Profile, ""),
            (ViewKind::Settings, ""),
        ] {
            let state = ViewState {
                view: kind,
                secondary_id: id.to_string(),
                ..ViewState::default()
            };
            let html = page(&f, &state, false);
            assert!(
                html.contains(&format!("data-view=\"{}\"", kind.as_str())),
                "missing marker for {kind:?}"
            );
        }
    }
}
