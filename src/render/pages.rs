//! Page bodies for the main column, one per view.

use std::fmt::Write as _;

use super::episode_card;
use super::{attr, links, text};
use crate::model::Episode;
use crate::state::Filter;
use crate::views::{
    DerivedView, HomeView, PodcasterView, ProfileView, SettingsView, TagView, TickerView,
};

pub fn main_content(view: &DerivedView<'_>) -> String {
    match view {
        DerivedView::Home(v) => home(v),
        DerivedView::Podcaster(v) => podcaster(v),
        DerivedView::Ticker(v) => ticker(v),
        DerivedView::Tag(v) => tag(v),
        DerivedView::Profile(v) => profile(v),
        DerivedView::Settings(v) => settings(v),
    }
}

fn cards(out: &mut String, episodes: &[&Episode]) {
    for ep in episodes {
        out.push_str(&episode_card::card(ep));
    }
}

fn section_title(out: &mut String, title: &str, count: Option<usize>) {
    let _ = write!(
        out,
        "<div class=\"flex items-center gap-2 mb-4\">\
         <h2 class=\"text-xl font-bold text-slate-800 dark:text-slate-200\">{}</h2>\
         <div class=\"h-px flex-1 bg-slate-200 dark:bg-slate-800\"></div>",
        text(title)
    );
    if let Some(n) = count {
        let _ = write!(
            out,
            "<span class=\"text-sm text-slate-500 bg-slate-100 dark:bg-slate-800 px-2 py-1 rounded-full\">{n} 集</span>"
        );
    }
    out.push_str("</div>\n");
}

fn filter_button(out: &mut String, f: &Filter, label: &str, active: bool) {
    let class = if active {
        "bg-slate-900 text-white dark:bg-amber-500 dark:text-slate-900"
    } else {
        "bg-white border border-slate-200 text-slate-600 hover:bg-slate-100 dark:bg-slate-900 dark:border-slate-700 dark:text-slate-400 dark:hover:bg-slate-800"
    };
    let _ = write!(
        out,
        "<a href=\"{}\" data-active=\"{}\" class=\"px-4 py-1.5 text-sm rounded-full font-medium whitespace-nowrap {}\">{}</a>",
        attr(&links::filter(f)),
        active,
        class,
        text(label)
    );
}

fn home(v: &HomeView<'_>) -> String {
    let mut out = String::from("<div class=\"space-y-6\" data-view=\"home\">\n");

    out.push_str("<div class=\"flex gap-2 overflow-x-auto pb-2\">");
    filter_button(&mut out, &Filter::All, "全部", v.filter.is_all());
    for show in &v.shows {
        let f = Filter::Show(show.name.clone());
        let active = v.filter == f;
        filter_button(&mut out, &f, &show.name, active);
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"space-y-6\">\n");
    cards(&mut out, &v.episodes);
    if v.episodes.is_empty() {
        out.push_str("<div class=\"text-center py-12 text-slate-500\">目前沒有符合篩選條件的集數。</div>\n");
    }
    out.push_str("</div>\n</div>\n");
    out
}

fn podcaster(v: &PodcasterView<'_>) -> String {
    let mut out = String::from("<div class=\"space-y-8\" data-view=\"podcaster\">\n");
    let _ = write!(
        out,
        "<div class=\"bg-white dark:bg-slate-900 rounded-2xl p-8 border border-slate-200 dark:border-slate-800 shadow-sm flex flex-col md:flex-row items-center md:items-start gap-6\">\
         <div data-avatar=\"{avatar_attr}\" class=\"w-24 h-24 md:w-32 md:h-32 rounded-2xl flex items-center justify-center text-3xl font-bold shadow-lg {color}\">{avatar}</div>\
         <div class=\"flex-1 space-y-3\">\
         <h1 class=\"text-3xl font-bold text-slate-900 dark:text-white\">{name}</h1>\
         <p class=\"text-slate-500 dark:text-slate-400 mt-1\">財經 • 投資 • 科技</p>\
         <button type=\"button\" data-inert=\"subscribe\" class=\"bg-slate-900 text-white dark:bg-amber-500 dark:text-slate-900 px-6 py-2 rounded-full font-bold hover:opacity-90\">訂閱</button>\
         <p class=\"text-slate-600 dark:text-slate-300 max-w-2xl leading-relaxed\">這裡是 {name} 的節目列表。透過深入淺出的方式，帶你了解最新的市場動態與投資趨勢。</p>\
         <div class=\"flex items-center gap-6 pt-2\">\
         <div><div class=\"font-bold text-xl font-mono\" data-count=\"{count}\">{count}</div><div class=\"text-xs text-slate-500 uppercase tracking-wider\">集數</div></div>\
         <div><div class=\"font-bold text-xl font-mono\">4.9</div><div class=\"text-xs text-slate-500 uppercase tracking-wider\">評分</div></div>\
         </div></div></div>\n",
        avatar_attr = attr(&v.avatar),
        color = attr(&v.color_class),
        avatar = text(&v.avatar),
        name = text(&v.name),
        count = v.episodes.len(),
    );

    section_title(&mut out, "所有集數", None);
    out.push_str("<div class=\"space-y-6\">\n");
    cards(&mut out, &v.episodes);
    if v.episodes.is_empty() {
        out.push_str("<div class=\"text-center py-12 text-slate-500\">此 Podcaster 目前沒有相關集數。</div>\n");
    }
    out.push_str("</div>\n</div>\n");
    out
}

fn ticker(v: &TickerView<'_>) -> String {
    let q = &v.quote;
    let color = if q.is_up {
        "text-red-600 dark:text-red-400"
    } else {
        "text-green-600 dark:text-green-400"
    };
    let bg = if q.is_up {
        "bg-red-50 dark:bg-red-900/20"
    } else {
        "bg-green-50 dark:bg-green-900/20"
    };

    let mut out = String::from("<div class=\"space-y-8\" data-view=\"ticker\">\n");
    out.push_str(
        "<div class=\"bg-white dark:bg-slate-900 rounded-2xl p-8 border border-slate-200 dark:border-slate-800 shadow-sm\"><div class=\"flex items-center gap-3\">",
    );
    let _ = write!(
        out,
        "<h1 class=\"text-4xl font-bold text-slate-900 dark:text-white tracking-tight\">{}</h1>",
        text(&q.display_name)
    );
    if let Some(sym) = &q.display_symbol {
        let _ = write!(
            out,
            "<span class=\"text-xl text-slate-500 font-mono bg-slate-100 dark:bg-slate-800 px-2 py-1 rounded\">{}</span>",
            text(sym)
        );
    }
    let _ = write!(
        out,
        "</div><div class=\"mt-2 flex items-baseline gap-4\">\
         <span data-price class=\"text-5xl font-bold font-mono {color}\">{price}</span>\
         <span class=\"flex items-center gap-1 font-bold text-lg px-2 py-1 rounded {bg} {color}\">{arrow} {change} ({pct})</span></div>\
         <p class=\"text-slate-500 mt-2 text-sm\">即時行情 • 延遲 15 分鐘</p>\
         <div class=\"flex gap-3 mt-6\">\
         <button type=\"button\" data-inert=\"watchlist\" class=\"bg-slate-900 text-white dark:bg-white dark:text-slate-900 px-6 py-3 rounded-lg font-bold hover:opacity-90\">☆ 加入自選</button>\
         <button type=\"button\" data-inert=\"alert\" class=\"border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-300 px-6 py-3 rounded-lg font-bold hover:bg-slate-50 dark:hover:bg-slate-800\">設定警示</button>\
         </div></div>\n",
        price = text(&q.price),
        arrow = if q.is_up { "▲" } else { "▼" },
        change = q.change.as_deref().unwrap_or_default(),
        pct = q.change_percent.as_deref().unwrap_or_default(),
    );

    out.push_str("<div>\n");
    section_title(&mut out, "相關集數提及", Some(v.episodes.len()));
    out.push_str("<div class=\"space-y-6\">\n");
    cards(&mut out, &v.episodes);
    if v.episodes.is_empty() {
        let _ = write!(
            out,
            "<div class=\"bg-slate-50 dark:bg-slate-800/50 rounded-xl p-12 text-center border border-dashed border-slate-300 dark:border-slate-700\">\
             <p class=\"text-slate-500 dark:text-slate-400\">目前沒有 Podcast 提到此標的。</p>\
             <a href=\"{}\" class=\"mt-4 inline-block text-amber-600 dark:text-amber-500 font-medium hover:underline\">回到首頁探索更多</a></div>\n",
            links::HOME
        );
    }
    out.push_str("</div>\n</div>\n</div>\n");
    out
}

fn tag(v: &TagView<'_>) -> String {
    let mut out = String::from("<div class=\"space-y-8\" data-view=\"tag\">\n");
    let _ = write!(
        out,
        "<div class=\"bg-white dark:bg-slate-900 rounded-2xl p-8 border border-slate-200 dark:border-slate-800 shadow-sm\">\
         <h1 class=\"text-3xl font-bold text-slate-900 dark:text-white\">{}</h1>\
         <p class=\"text-slate-500 dark:text-slate-400 mt-2\">所有標記此主題的 Podcast 集數</p></div>\n",
        text(&v.tag)
    );
    section_title(&mut out, "相關集數", Some(v.episodes.len()));
    out.push_str("<div class=\"space-y-6\">\n");
    cards(&mut out, &v.episodes);
    if v.episodes.is_empty() {
        out.push_str("<div class=\"text-center py-12 text-slate-500\">目前沒有與此標籤相關的集數。</div>\n");
    }
    out.push_str("</div>\n</div>\n");
    out
}

fn profile(v: &ProfileView<'_>) -> String {
    let u = v.user;
    let mut out = String::from("<div class=\"space-y-8\" data-view=\"profile\">\n");
    let _ = write!(
        out,
        "<div class=\"bg-white dark:bg-slate-900 rounded-2xl p-8 border border-slate-200 dark:border-slate-800 shadow-sm flex items-center gap-6\">\
         <div class=\"w-24 h-24 rounded-full bg-gradient-to-tr from-amber-500 to-purple-600 flex items-center justify-center text-3xl font-bold text-white\">{avatar}</div>\
         <div><h1 class=\"text-3xl font-bold text-slate-900 dark:text-white\">{name}</h1>\
         <p class=\"text-slate-500\">{handle} • {joined}</p>\
         <span class=\"inline-block mt-2 text-xs font-bold px-2 py-1 rounded bg-amber-100 text-amber-700 dark:bg-amber-900/30 dark:text-amber-400\">{plan}</span></div></div>\n",
        avatar = text(&u.avatar),
        name = text(&u.display_name),
        handle = text(&u.handle),
        joined = text(&u.joined),
        plan = text(&u.plan),
    );

    section_title(&mut out, "追蹤的節目", None);
    out.push_str("<div class=\"flex gap-2 flex-wrap\">");
    for show in &u.followed_shows {
        let _ = write!(
            out,
            "<a href=\"{}\" class=\"px-4 py-1.5 text-sm rounded-full bg-white border border-slate-200 dark:bg-slate-900 dark:border-slate-700\">{}</a>",
            attr(&links::podcaster(show)),
            text(show)
        );
    }
    out.push_str("</div>\n");

    section_title(&mut out, "自選股", None);
    out.push_str("<div class=\"flex gap-2 flex-wrap\">");
    for sym in &u.watchlist {
        let _ = write!(
            out,
            "<a href=\"{}\" class=\"px-3 py-1 text-sm font-mono rounded bg-slate-100 dark:bg-slate-800\">{}</a>",
            attr(&links::ticker(sym)),
            text(sym)
        );
    }
    out.push_str("</div>\n</div>\n");
    out
}

fn settings(v: &SettingsView<'_>) -> String {
    let mut out = String::from("<div class=\"space-y-8\" data-view=\"settings\">\n");
    out.push_str("<h1 class=\"text-3xl font-bold text-slate-900 dark:text-white\">設定</h1>\n");
    let _ = write!(
        out,
        "<div class=\"bg-white dark:bg-slate-900 rounded-2xl p-6 border border-slate-200 dark:border-slate-800 divide-y divide-slate-100 dark:divide-slate-800\">\
         <div class=\"flex justify-between items-center py-4\"><div><div class=\"font-bold\">深色模式</div>\
         <div class=\"text-sm text-slate-500\">目前：{current}</div></div>\
         <a href=\"{toggle}\" class=\"px-4 py-2 rounded-full text-sm font-bold bg-slate-900 text-white dark:bg-amber-500 dark:text-slate-900\">切換</a></div>\
         <div class=\"flex justify-between items-center py-4\"><div><div class=\"font-bold\">帳號</div>\
         <div class=\"text-sm text-slate-500\">{email}</div></div></div>\
         <div class=\"flex justify-between items-center py-4\"><div><div class=\"font-bold\">方案</div>\
         <div class=\"text-sm text-slate-500\">{plan}</div></div></div>\
         <div class=\"flex justify-between items-center py-4\"><div><div class=\"font-bold\">新集數通知</div>\
         <div class=\"text-sm text-slate-500\">追蹤的節目上架新集數時通知我</div></div></div>\
         </div>\n",
        current = if v.theme.is_dark() { "深色" } else { "淺色" },
        toggle = links::THEME_TOGGLE,
        email = text(&v.user.email),
        plan = text(&v.user.plan),
    );
    out.push_str("</div>\n");
    out
}
