//! Top bar: logo (home), search box, theme toggle, profile dropdown, market feed.

use std::fmt::Write as _;

use super::{attr, links, text};
use crate::model::{DemoUser, Direction, TickerItem};
use crate::theme::Theme;

pub fn header(feed: &[TickerItem], theme: Theme, menu_open: bool, user: &DemoUser) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(
        "<header class=\"bg-slate-900 text-white sticky top-0 z-50 shadow-lg dark:border-b dark:border-slate-800\">\n\
         <div class=\"max-w-7xl mx-auto px-4 sm:px-6 lg:px-8\">\n\
         <div class=\"flex justify-between h-16 items-center\">\n",
    );

    let _ = write!(
        out,
        "<a href=\"{}\" class=\"flex items-center gap-3 group\">\
         <div class=\"w-8 h-8 bg-amber-500 rounded flex items-center justify-center font-bold text-slate-900 select-none\">T</div>\
         <span class=\"font-bold text-xl tracking-wide hidden sm:block group-hover:text-amber-400\">TrendBrief</span></a>\n",
        links::HOME
    );

    let _ = write!(
        out,
        "<form action=\"{}\" method=\"get\" class=\"hidden md:flex flex-1 max-w-lg mx-8\">\
         <input type=\"text\" name=\"q\" class=\"block w-full px-3 py-2 border border-slate-700 rounded-md bg-slate-800 text-slate-300 placeholder-slate-500 sm:text-sm\" \
         placeholder=\"搜尋節目、代號 (2330)...\"></form>\n",
        links::SEARCH
    );

    out.push_str("<div class=\"flex items-center gap-4\">\n");
    let _ = write!(
        out,
        "<a href=\"{}\" aria-label=\"Toggle Theme\" data-theme=\"{}\" \
         class=\"w-10 h-10 rounded-full bg-slate-800 hover:bg-slate-700 text-amber-400 flex items-center justify-center ring-1 ring-slate-700\">{}</a>\n",
        links::THEME_TOGGLE,
        theme.as_str(),
        if theme.is_dark() { "☾" } else { "☀" }
    );
    out.push_str(
        "<div class=\"h-8 w-1 border-r border-slate-700 mx-1 hidden sm:block\"></div>\n\
         <button type=\"button\" data-inert=\"notifications\" aria-label=\"通知\" class=\"text-slate-400 hover:text-white relative\">🔔\
         <span class=\"absolute top-0 right-0 block h-2 w-2 rounded-full ring-2 ring-slate-900 bg-red-500\"></span></button>\n",
    );
    out.push_str(&profile_menu(user, menu_open));
    out.push_str("</div>\n</div>\n</div>\n");

    out.push_str(&ticker_feed(feed));
    out.push_str("</header>\n");
    out
}

/// Avatar button plus dropdown. The dropdown is only emitted while open;
/// any other navigation closes it server-side.
fn profile_menu(user: &DemoUser, open: bool) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<div class=\"relative\" data-menu=\"{}\">\
         <a href=\"{}\" class=\"h-8 w-8 rounded-full bg-gradient-to-tr from-amber-500 to-purple-600 border-2 border-slate-700 flex items-center justify-center text-xs font-bold\">{}</a>\n",
        if open { "open" } else { "closed" },
        links::MENU_TOGGLE,
        text(&user.avatar)
    );
    if open {
        let _ = write!(
            out,
            "<div class=\"absolute right-0 mt-2 w-48 bg-white dark:bg-slate-900 text-slate-700 dark:text-slate-200 rounded-lg shadow-lg border border-slate-200 dark:border-slate-800 py-1\">\
             <div class=\"px-4 py-2 text-sm font-bold\">{}</div>\
             <a href=\"{}\" class=\"block px-4 py-2 text-sm hover:bg-slate-100 dark:hover:bg-slate-800\">個人檔案</a>\
             <a href=\"{}\" class=\"block px-4 py-2 text-sm hover:bg-slate-100 dark:hover:bg-slate-800\">設定</a>\
             </div>\n",
            text(&user.display_name),
            links::PROFILE,
            links::SETTINGS
        );
    }
    out.push_str("</div>\n");
    out
}

fn direction_class(d: Direction) -> &'static str {
    match d {
        Direction::Up => "text-red-500 dark:text-red-400",
        Direction::Down => "text-green-500 dark:text-green-400",
        Direction::Neutral => "text-slate-200",
    }
}

fn ticker_feed(feed: &[TickerItem]) -> String {
    let mut out = String::from(
        "<div class=\"bg-black text-xs py-1 overflow-hidden border-t border-slate-800\">\
         <div class=\"max-w-7xl mx-auto px-4 flex gap-6 font-mono text-slate-400 whitespace-nowrap overflow-x-auto\">\n",
    );
    for (i, item) in feed.iter().enumerate() {
        if i > 0 {
            out.push_str("<span class=\"text-slate-600\">|</span>\n");
        }
        let _ = write!(
            out,
            "<a href=\"{}\" class=\"flex items-center gap-1 hover:bg-slate-800 px-1 rounded\">{} <span class=\"{}\">{}</span></a>\n",
            attr(&links::ticker(&item.name)),
            text(&item.name),
            direction_class(item.direction),
            text(&item.value)
        );
    }
    out.push_str("</div>\n</div>\n");
    out
}
