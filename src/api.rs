use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::config::AppConfig;
use crate::fixtures::Fixtures;
use crate::prefs::{ColorSchemeProbe, FilePreferenceStore, PreferenceStore};
use crate::render;
use crate::state::{Filter, Session, ViewKind, ViewState};
use crate::theme::ThemeController;
use crate::views;

/// Redirect target after a navigation: the page, scrolled to the top.
pub const AFTER_NAVIGATE: &str = "/#top";
/// Redirect target after an in-place change (filter, theme, menu).
pub const AFTER_UPDATE: &str = "/";

#[derive(Clone)]
pub struct AppState {
    fixtures: Arc<Fixtures>,
    session: Arc<RwLock<Session>>,
}

impl AppState {
    pub fn new(
        fixtures: Fixtures,
        store: Arc<dyn PreferenceStore>,
        probe: &dyn ColorSchemeProbe,
    ) -> Self {
        let theme = ThemeController::init(store, probe);
        Self {
            fixtures: Arc::new(fixtures),
            session: Arc::new(RwLock::new(Session::new(theme))),
        }
    }

    /// Fixtures, file-backed preferences and the color-scheme source named
    /// by `cfg`.
    pub fn from_config(cfg: &AppConfig) -> Self {
        let fixtures = Fixtures::load(cfg.fixtures_path.as_deref());
        let store = Arc::new(FilePreferenceStore::new(&cfg.prefs_path));
        let probe = cfg.color_scheme.probe();
        Self::new(fixtures, store, probe.as_ref())
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    /// Current view snapshot.
    pub fn snapshot(&self) -> ViewState {
        self.read().view().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(|| async { "OK" }))
        .route("/home", get(nav_home))
        .route("/podcaster/{name}", get(nav_podcaster))
        .route("/ticker/{id}", get(nav_ticker))
        .route("/tag/{tag}", get(nav_tag))
        .route("/profile", get(nav_profile))
        .route("/settings", get(nav_settings))
        .route("/filter/{value}", get(set_filter))
        .route("/theme/toggle", get(toggle_theme))
        .route("/menu/toggle", get(toggle_menu))
        .route("/search", get(search))
        .route("/api/state", get(api_state))
        .route("/api/view", get(api_view))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Alias kept for callers that build the router by name.
pub fn router(state: AppState) -> Router {
    create_router(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let (snapshot, menu_open) = {
        let s = state.read();
        (s.view().clone(), s.menu_open())
    };
    Html(render::page(state.fixtures(), &snapshot, menu_open))
}

fn navigate(state: &AppState, kind: ViewKind, id: Option<&str>) -> Redirect {
    state.write().navigate(kind, id);
    Redirect::to(AFTER_NAVIGATE)
}

async fn nav_home(State(state): State<AppState>) -> Redirect {
    navigate(&state, ViewKind::Home, None)
}

async fn nav_podcaster(State(state): State<AppState>, Path(name): Path<String>) -> Redirect {
    navigate(&state, ViewKind::Podcaster, Some(&name))
}

async fn nav_ticker(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    navigate(&state, ViewKind::Ticker, Some(&id))
}

async fn nav_tag(State(state): State<AppState>, Path(tag): Path<String>) -> Redirect {
    navigate(&state, ViewKind::Tag, Some(&tag))
}

async fn nav_profile(State(state): State<AppState>) -> Redirect {
    navigate(&state, ViewKind::Profile, None)
}

async fn nav_settings(State(state): State<AppState>) -> Redirect {
    navigate(&state, ViewKind::Settings, None)
}

async fn set_filter(State(state): State<AppState>, Path(value): Path<String>) -> Redirect {
    let mut s = state.write();
    s.set_filter(Filter::parse(&value));
    s.close_menu();
    Redirect::to(AFTER_UPDATE)
}

async fn toggle_theme(State(state): State<AppState>) -> Redirect {
    // The preference write runs under the session lock, so stored and
    // in-memory themes change together. It is a single small file.
    let mut s = state.write();
    s.toggle_theme();
    s.close_menu();
    Redirect::to(AFTER_UPDATE)
}

async fn toggle_menu(State(state): State<AppState>) -> Redirect {
    state.write().toggle_menu();
    Redirect::to(AFTER_UPDATE)
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// Map a search box query to a navigation target:
/// exact show name → podcaster, leading `#` → tag, empty → home, else ticker.
pub fn resolve_search<'q>(fixtures: &Fixtures, q: &'q str) -> (ViewKind, Option<&'q str>) {
    let q = q.trim();
    if q.is_empty() {
        return (ViewKind::Home, None);
    }
    if fixtures.episodes.iter().any(|ep| ep.show_name == q) {
        return (ViewKind::Podcaster, Some(q));
    }
    if q.starts_with('#') {
        return (ViewKind::Tag, Some(q));
    }
    (ViewKind::Ticker, Some(q))
}

async fn search(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Redirect {
    let (kind, id) = resolve_search(state.fixtures(), &query.q);
    navigate(&state, kind, id)
}

#[derive(Serialize)]
struct StateOut {
    #[serde(flatten)]
    view: ViewState,
    menu_open: bool,
    theme_persisted: bool,
}

async fn api_state(State(state): State<AppState>) -> Json<StateOut> {
    let s = state.read();
    Json(StateOut {
        view: s.view().clone(),
        menu_open: s.menu_open(),
        theme_persisted: !s.theme_controller().is_degraded(),
    })
}

async fn api_view(State(state): State<AppState>) -> Response {
    let snapshot = state.snapshot();
    Json(views::derive(state.fixtures(), &snapshot)).into_response()
}
