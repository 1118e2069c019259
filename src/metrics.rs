use axum::{routing::get, Router};
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::state::ViewKind;
use crate::theme::Theme;

pub const ENV_METRICS_ROUTES: &str = "METRICS_ROUTES";

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the process-wide Prometheus recorder (once) and describe the
    /// UI counters so they show up on `/metrics` before the first event.
    pub fn init() -> anyhow::Result<Self> {
        static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();
        let handle = HANDLE
            .get_or_try_init(|| PrometheusBuilder::new().install_recorder())?
            .clone();

        describe_counter!(
            "trendbrief_navigations_total",
            "Navigation intents handled, by target view."
        );
        describe_counter!(
            "trendbrief_theme_toggles_total",
            "Theme toggles, by resulting theme."
        );

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// `METRICS_ROUTES=1` mounts `/metrics`.
pub fn routes_enabled() -> bool {
    std::env::var(ENV_METRICS_ROUTES).ok().as_deref() == Some("1")
}

pub fn record_navigation(kind: ViewKind) {
    counter!("trendbrief_navigations_total", "view" => kind.as_str()).increment(1);
}

pub fn record_theme_toggle(theme: Theme) {
    counter!("trendbrief_theme_toggles_total", "theme" => theme.as_str()).increment(1);
}
