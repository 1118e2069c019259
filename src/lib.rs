// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod config;
pub mod fixtures;
pub mod highlight;
pub mod metrics;
pub mod model;
pub mod prefs;
pub mod render;
pub mod state;
pub mod theme;
pub mod views;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::config::AppConfig;
pub use crate::fixtures::Fixtures;

use tracing::info;

/// Build the full in-process app: config from disk/env, state, page and API
/// routes, plus `/metrics` when `METRICS_ROUTES=1`.
pub async fn app() -> anyhow::Result<axum::Router> {
    let cfg = AppConfig::load_default()?;
    info!(
        target: "trendbrief",
        fixtures = ?cfg.fixtures_path,
        prefs = %cfg.prefs_path.display(),
        color_scheme = ?cfg.color_scheme,
        "building app"
    );

    let state = AppState::from_config(&cfg);
    let mut router = api::create_router(state);

    if crate::metrics::routes_enabled() {
        let m = crate::metrics::Metrics::init()?;
        router = router.merge(m.router());
    }
    Ok(router)
}
