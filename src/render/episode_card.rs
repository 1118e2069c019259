//! Episode card: avatar/show links, title, hot badge, summary with
//! clickable highlights, tag links.

use std::fmt::Write as _;

use super::{attr, links, text};
use crate::highlight::{self, Segment};
use crate::model::{Episode, HighlightKind, SummaryPoint};

const HIGHLIGHT_CLASS: &str = "inline-block mx-1 bg-red-50 text-red-700 border-b border-red-200 hover:bg-red-100 \
dark:bg-red-900/20 dark:text-red-300 dark:border-red-800 dark:hover:bg-red-900/40 px-1.5 py-0.5 rounded font-medium";

pub fn card(ep: &Episode) -> String {
    let mut out = String::with_capacity(2048);
    let show_href = links::podcaster(&ep.show_name);

    let _ = write!(
        out,
        "<article data-episode=\"{}\" class=\"group flex flex-col bg-white rounded-xl shadow-sm border border-slate-200 overflow-hidden dark:bg-slate-900 dark:border-slate-800\">\n\
         <div class=\"p-6 flex-1 flex flex-col\">\n\
         <div class=\"flex justify-between items-start mb-4\"><div class=\"flex gap-4\">\n",
        attr(&ep.id)
    );
    let _ = write!(
        out,
        "<a href=\"{href}\" class=\"w-12 h-12 rounded flex items-center justify-center text-xs font-bold {color} hover:opacity-80 flex-shrink-0 mt-0.5\">{avatar}</a>\n\
         <div><h2 class=\"text-xl font-bold text-slate-900 dark:text-slate-100 leading-tight\">{title}</h2>\n\
         <div class=\"flex items-center gap-1.5 text-sm text-slate-400 dark:text-slate-500 mt-1.5\">\
         <a href=\"{href}\" class=\"hover:text-amber-600 dark:hover:text-amber-400 font-medium\">{show}</a>\
         <span class=\"text-slate-300 dark:text-slate-600\">•</span><span>{time}</span></div></div>\n</div>\n",
        href = attr(&show_href),
        color = attr(&ep.show_color_class),
        avatar = text(&ep.show_avatar),
        title = text(&ep.title),
        show = text(&ep.show_name),
        time = text(&ep.time_ago),
    );
    if ep.is_hot {
        out.push_str(
            "<span class=\"bg-amber-50 text-amber-700 dark:bg-amber-900/30 dark:text-amber-400 text-xs font-semibold px-2.5 py-0.5 rounded border border-amber-100 dark:border-amber-900 whitespace-nowrap ml-2\">熱門</span>\n",
        );
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"flex-1\">\n");
    if !ep.summary.is_empty() {
        out.push_str("<div class=\"space-y-3 mb-6\">\n");
        if ep.has_key_points() {
            out.push_str(
                "<h3 class=\"text-sm font-bold text-slate-400 uppercase tracking-wider\">重點摘要</h3>\n",
            );
        }
        out.push_str("<ul class=\"space-y-3 text-slate-700 dark:text-slate-300 leading-relaxed\">\n");
        for point in &ep.summary {
            out.push_str(&summary_item(point));
        }
        out.push_str("</ul>\n</div>\n");
    }
    out.push_str("</div>\n");

    out.push_str(
        "<div class=\"flex items-center justify-between border-t border-slate-100 dark:border-slate-800 pt-4 mt-auto\">\n\
         <div class=\"flex gap-2 flex-wrap\">",
    );
    for t in &ep.tags {
        let _ = write!(
            out,
            "<a href=\"{}\" class=\"text-xs bg-slate-100 text-slate-600 px-2 py-1 rounded dark:bg-slate-800 dark:text-slate-400 hover:bg-slate-200 dark:hover:bg-slate-700\">{}</a>",
            attr(&links::tag(t)),
            text(t)
        );
    }
    out.push_str(
        "</div>\n<span class=\"flex items-center gap-2 bg-amber-500 text-slate-900 px-4 py-1.5 rounded-full text-sm font-bold whitespace-nowrap\">▶ 收聽</span>\n\
         </div>\n</div>\n</article>\n",
    );
    out
}

fn summary_item(point: &SummaryPoint) -> String {
    let mut out = String::from("<li class=\"flex gap-3\">");
    if point.has_highlights() {
        out.push_str("<span class=\"text-amber-500 mt-1.5 flex-shrink-0\">●</span>");
        out.push_str("<span>");
    } else {
        out.push_str("<span class=\"line-clamp-3 text-slate-600 dark:text-slate-400\">");
    }
    out.push_str(&summary_text(point));
    out.push_str("</span></li>\n");
    out
}

/// Summary text with highlights turned into ticker links.
pub fn summary_text(point: &SummaryPoint) -> String {
    let mut out = String::new();
    for seg in highlight::split_point(point) {
        match seg {
            Segment::Plain { text: t } => out.push_str(&text(t)),
            Segment::Highlight {
                text: t,
                symbol: Some(sym),
                ..
            } => {
                let _ = write!(
                    out,
                    "<a href=\"{}\" data-symbol=\"{}\" class=\"{}\">{}</a>",
                    attr(&links::ticker(sym)),
                    attr(sym),
                    HIGHLIGHT_CLASS,
                    text(t)
                );
            }
            Segment::Highlight {
                text: t,
                kind: HighlightKind::Bold,
                symbol: None,
            } => {
                let _ = write!(out, "<strong>{}</strong>", text(t));
            }
            Segment::Highlight {
                text: t,
                kind: HighlightKind::Stock,
                symbol: None,
            } => {
                let _ = write!(out, "<span class=\"{}\">{}</span>", HIGHLIGHT_CLASS, text(t));
            }
        }
    }
    out
}
