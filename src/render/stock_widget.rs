//! Sidebar: related-stocks widget and the upgrade banner.

use std::fmt::Write as _;

use super::{attr, links, text};
use crate::model::Stock;
use crate::views::format_number;

pub fn sidebar(stocks: &[Stock]) -> String {
    let mut out = widget(stocks);
    out.push_str(
        "<div class=\"bg-gradient-to-r from-indigo-600 to-purple-600 rounded-xl p-6 text-white text-center shadow-lg dark:from-indigo-900 dark:to-purple-900\">\
         <p class=\"font-bold text-lg mb-2\">TrendBrief Pro</p>\
         <p class=\"text-indigo-100 text-sm mb-4\">解鎖 AI 自動逐字稿與深度分析。</p>\
         <span class=\"bg-white text-indigo-600 px-4 py-2 rounded-lg text-sm font-bold shadow\">立即升級</span></div>\n",
    );
    out
}

pub fn widget(stocks: &[Stock]) -> String {
    let mut out = String::from(
        "<div class=\"bg-white rounded-xl shadow-lg border border-slate-200 overflow-hidden dark:bg-slate-900 dark:border-slate-800 dark:shadow-none\">\n\
         <div class=\"bg-slate-50 px-4 py-3 border-b border-slate-200 flex justify-between items-center dark:bg-slate-800 dark:border-slate-700\">\
         <h3 class=\"text-slate-700 font-bold text-sm dark:text-slate-200\">⚡ 本集相關個股</h3>\
         <span class=\"text-xs text-slate-400 dark:text-slate-500\">延遲 15 分鐘</span></div>\n\
         <div class=\"divide-y divide-slate-100 dark:divide-slate-800\">\n",
    );
    for s in stocks {
        out.push_str(&row(s));
    }
    out.push_str(
        "</div>\n<div class=\"bg-slate-50 px-4 py-2 border-t border-slate-200 text-center dark:bg-slate-800 dark:border-slate-700\">\
         <button type=\"button\" data-inert=\"chart\" class=\"text-xs text-amber-600 dark:text-amber-500 hover:text-amber-700 font-medium w-full\">查看完整 K 線圖 →</button></div>\n</div>\n",
    );
    out
}

fn row(s: &Stock) -> String {
    let up = s.is_up();
    let color = if up {
        "text-red-600 dark:text-red-400"
    } else {
        "text-green-600 dark:text-green-400"
    };
    let bg = if up {
        "bg-red-50 dark:bg-transparent"
    } else {
        "bg-green-50 dark:bg-transparent"
    };
    let bar = if up { "bg-red-500" } else { "bg-green-500" };

    let mut out = String::new();
    let _ = write!(
        out,
        "<a href=\"{href}\" data-symbol=\"{sym_attr}\" class=\"block p-4 hover:bg-slate-50 dark:hover:bg-slate-800 group\">\
         <div class=\"flex justify-between items-center mb-1\"><div>\
         <div class=\"text-slate-900 dark:text-slate-100 font-bold text-lg group-hover:text-amber-600\">{name}</div>\
         <div class=\"text-xs text-slate-400\">{sym}</div></div>\
         <div class=\"text-right\"><div class=\"{color} font-bold font-mono text-lg\">{price}</div>\
         <div class=\"{color} text-xs font-mono {bg} px-1 rounded inline-block\">{arrow} {pct:.2}%</div></div></div>\
         <div class=\"h-1 w-full bg-slate-100 dark:bg-slate-700 rounded-full mt-2 overflow-hidden\">\
         <div class=\"h-full {bar}\" style=\"width: {strength}%\"></div></div></a>\n",
        href = attr(&links::ticker(&s.symbol)),
        sym_attr = attr(&s.symbol),
        name = text(&s.name),
        sym = text(&s.symbol),
        price = format_number(s.price, 1),
        arrow = if up { "▲" } else { "▼" },
        pct = s.change_percent.abs(),
        strength = s.strength.min(100),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    #[test]
    fn rows_link_to_symbol_and_show_direction() {
        let f = Fixtures::default_seed();
        let html = widget(&f.stocks);
        assert!(html.contains("href=\"/ticker/3008.TW\""));
        assert!(html.contains("2,450.0"));
        assert!(html.contains("▼ 0.81%"));
        assert!(html.contains("▲ 5.98%"));
        assert!(html.contains("width: 85%"));
        assert!(html.contains("data-inert=\"chart\""));
    }
}
