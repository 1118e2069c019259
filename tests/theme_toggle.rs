// tests/theme_toggle.rs
//
// Theme persistence through the HTTP surface: startup resolution, toggle
// cycle, persisted value, degraded storage.

mod common;

use std::sync::Arc;

use serde_json::Value as Json;

use common::{click, get, router_with};
use trendbrief::config::ColorSchemeSetting;
use trendbrief::prefs::{
    ColorSchemeProbe, EnvColorScheme, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore,
    PrefsError, PrefsResult, ENV_PREFERS_COLOR_SCHEME,
};
use trendbrief::theme::{Theme, ThemeController, THEME_KEY};

struct NoStorage;

impl PreferenceStore for NoStorage {
    fn get(&self, _key: &str) -> PrefsResult<Option<String>> {
        Err(PrefsError::Unavailable("storage disabled".into()))
    }
    fn set(&self, _key: &str, _value: &str) -> PrefsResult<()> {
        Err(PrefsError::Unavailable("storage disabled".into()))
    }
}

#[tokio::test]
async fn light_system_then_toggle_twice() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("preferences.json");
    let store = Arc::new(FilePreferenceStore::new(&path));
    let app = router_with(store.clone(), Some(false));

    let html = get(&app, "/").await.body;
    assert!(html.contains("<html lang=\"zh-Hant\" class=\"\">"));
    assert_eq!(store.get(THEME_KEY).unwrap(), None);

    let html = click(&app, "/theme/toggle").await;
    assert!(html.contains("<html lang=\"zh-Hant\" class=\"dark\">"));
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

    let html = click(&app, "/theme/toggle").await;
    assert!(html.contains("<html lang=\"zh-Hant\" class=\"\">"));
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[tokio::test]
async fn stored_preference_wins_over_system() {
    let store = Arc::new(MemoryPreferenceStore::new());
    store.set(THEME_KEY, "dark").unwrap();
    let app = router_with(store, Some(false));
    let v: Json = serde_json::from_str(&get(&app, "/api/state").await.body).unwrap();
    assert_eq!(v["theme"], "dark");
}

#[tokio::test]
async fn system_dark_used_when_nothing_stored() {
    let app = router_with(Arc::new(MemoryPreferenceStore::new()), Some(true));
    let html = get(&app, "/").await.body;
    assert!(html.contains("class=\"dark\""));
}

#[tokio::test]
async fn unavailable_storage_still_toggles_in_memory() {
    let app = router_with(Arc::new(NoStorage), Some(false));

    let v: Json = serde_json::from_str(&get(&app, "/api/state").await.body).unwrap();
    assert_eq!(v["theme"], "light");
    assert_eq!(v["theme_persisted"], false);

    let html = click(&app, "/theme/toggle").await;
    assert!(html.contains("class=\"dark\""));
    let html = click(&app, "/theme/toggle").await;
    assert!(html.contains("<html lang=\"zh-Hant\" class=\"\">"));
}

#[tokio::test]
async fn settings_page_reflects_toggle() {
    let app = router_with(Arc::new(MemoryPreferenceStore::new()), None);
    let html = click(&app, "/settings").await;
    assert!(html.contains("目前：淺色"));
    let html = click(&app, "/theme/toggle").await;
    // Toggling does not navigate away.
    assert!(html.contains("data-view=\"settings\""));
    assert!(html.contains("目前：深色"));
}

#[serial_test::serial]
#[test]
fn system_scheme_reads_host_preference() {
    std::env::set_var(ENV_PREFERS_COLOR_SCHEME, "dark");
    assert_eq!(EnvColorScheme.prefers_dark().unwrap(), Some(true));

    let probe = ColorSchemeSetting::System.probe();
    let theme = ThemeController::init(Arc::new(MemoryPreferenceStore::new()), probe.as_ref());
    assert_eq!(theme.theme(), Theme::Dark);

    std::env::remove_var(ENV_PREFERS_COLOR_SCHEME);
}

#[serial_test::serial]
#[test]
fn system_scheme_without_host_preference_is_light() {
    std::env::remove_var(ENV_PREFERS_COLOR_SCHEME);
    assert_eq!(EnvColorScheme.prefers_dark().unwrap(), None);

    let theme = ThemeController::init(Arc::new(MemoryPreferenceStore::new()), &EnvColorScheme);
    assert_eq!(theme.theme(), Theme::Light);
}

#[serial_test::serial]
#[test]
fn stored_value_beats_host_preference() {
    std::env::set_var(ENV_PREFERS_COLOR_SCHEME, "dark");
    let store = Arc::new(MemoryPreferenceStore::new());
    store.set(THEME_KEY, "light").unwrap();

    let theme = ThemeController::init(store, &EnvColorScheme);
    assert_eq!(theme.theme(), Theme::Light);

    std::env::remove_var(ENV_PREFERS_COLOR_SCHEME);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_toggles_leave_file_in_step_with_memory() {
    let tmp = tempfile::tempdir().unwrap();
    let store = Arc::new(FilePreferenceStore::new(tmp.path().join("preferences.json")));
    let app = router_with(store.clone(), Some(false));

    let handles: Vec<_> = (0..9)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { get(&app, "/theme/toggle").await.status })
        })
        .collect();
    for h in handles {
        assert!(h.await.unwrap().is_redirection());
    }

    let v: Json = serde_json::from_str(&get(&app, "/api/state").await.body).unwrap();
    assert_eq!(v["theme"], "dark");
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
}
