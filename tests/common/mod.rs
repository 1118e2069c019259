// tests/common/mod.rs
//
// Shared helpers: build a router over seed fixtures and drive it with
// tower::ServiceExt::oneshot, no sockets.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt as _;

use trendbrief::api::{self, AppState};
use trendbrief::fixtures::Fixtures;
use trendbrief::prefs::{FixedColorScheme, MemoryPreferenceStore, PreferenceStore};

pub const BODY_LIMIT: usize = 1024 * 1024;

pub fn router_with(store: Arc<dyn PreferenceStore>, prefers_dark: Option<bool>) -> Router {
    let state = AppState::new(
        Fixtures::default_seed(),
        store,
        &FixedColorScheme(prefers_dark),
    );
    api::create_router(state)
}

pub fn test_router() -> Router {
    router_with(Arc::new(MemoryPreferenceStore::new()), None)
}

pub struct Resp {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

pub async fn get(app: &Router, uri: &str) -> Resp {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build GET");
    let resp = app.clone().oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    Resp {
        status,
        location,
        body: String::from_utf8(bytes).expect("utf8"),
    }
}

/// Follow a navigation link, assert the redirect, return the re-rendered page.
pub async fn click(app: &Router, href: &str) -> String {
    let r = get(app, href).await;
    assert!(
        r.status.is_redirection(),
        "{href} should redirect, got {}",
        r.status
    );
    let page = get(app, "/").await;
    assert_eq!(page.status, StatusCode::OK);
    page.body
}

pub fn episode_ids(html: &str) -> Vec<String> {
    html.split("data-episode=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}
