// tests/e2e_smoke.rs
//
// End-to-end scenarios over the seed fixtures: navigate by clicking the links
// the pages render, check what the next render shows.

mod common;

use common::{click, episode_ids, get, test_router};
use trendbrief::render::links;

#[tokio::test]
async fn tag_and_podcaster_scenario() {
    let app = test_router();

    let html = click(&app, &links::tag("#航運")).await;
    assert!(html.contains("data-view=\"tag\""));
    assert_eq!(episode_ids(&html), vec!["2"]);

    let html = click(&app, &links::podcaster("股癌 Gooaye")).await;
    assert!(html.contains("data-view=\"podcaster\""));
    assert_eq!(episode_ids(&html), vec!["1"]);
}

#[tokio::test]
async fn partial_tag_matches_nothing_but_ticker_substring_does() {
    let app = test_router();

    let html = click(&app, &links::tag("#航")).await;
    assert!(episode_ids(&html).is_empty());
    assert!(html.contains("目前沒有與此標籤相關的集數。"));

    let html = click(&app, &links::ticker("#航")).await;
    assert_eq!(episode_ids(&html), vec!["2"]);
}

#[tokio::test]
async fn unknown_podcaster_gets_placeholder_avatar() {
    let app = test_router();
    let html = click(&app, &links::podcaster("游庭皓的財經皓角")).await;
    assert!(html.contains("data-avatar=\"游\""));
    assert!(html.contains("bg-slate-500"));
    assert!(html.contains("此 Podcaster 目前沒有相關集數。"));
    assert!(episode_ids(&html).is_empty());
}

#[tokio::test]
async fn links_on_cards_lead_to_their_views() {
    let app = test_router();
    let home = get(&app, "/").await.body;

    // Highlight in the first card links to its symbol.
    let highlight = links::ticker("2382");
    assert!(home.contains(&format!("href=\"{highlight}\"")));
    let html = click(&app, &highlight).await;
    assert!(html.contains("廣達"));
    assert!(html.contains("2382.TW"));
    assert_eq!(episode_ids(&html), vec!["1"]);

    // Tag on the second card.
    let tag = links::tag("#宏觀");
    assert!(home.contains(&format!("href=\"{tag}\"")));
    let html = click(&app, &tag).await;
    assert_eq!(episode_ids(&html), vec!["2"]);
}

#[tokio::test]
async fn feed_index_shows_price_without_symbol() {
    let app = test_router();
    let html = click(&app, &links::ticker("櫃買")).await;
    assert!(html.contains("250.3"));
    assert!(html.contains("text-green-600"));
    assert!(!html.contains("font-mono bg-slate-100 dark:bg-slate-800 px-2 py-1 rounded\">櫃買"));
}
