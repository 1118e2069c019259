//! theme.rs — light/dark preference with persistence.
//!
//! Startup order: stored `"theme"` value, then the host color-scheme probe,
//! then light. Storage failures are logged and the controller keeps working
//! from memory for the rest of the process.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::prefs::{ColorSchemeProbe, MemoryPreferenceStore, PreferenceStore};

pub const THEME_KEY: &str = "theme";
/// Class toggled on the document root.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Root element class list for this theme.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => DARK_CLASS,
        }
    }
}

pub struct ThemeController {
    theme: Theme,
    store: Arc<dyn PreferenceStore>,
    degraded: bool,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("theme", &self.theme)
            .field("degraded", &self.degraded)
            .finish()
    }
}

impl ThemeController {
    /// Resolve the initial theme. Only a stored `"dark"` selects dark; any
    /// other stored value selects light. The probe is consulted only when
    /// nothing is stored.
    pub fn init(store: Arc<dyn PreferenceStore>, probe: &dyn ColorSchemeProbe) -> Self {
        let (stored, degraded) = match store.get(THEME_KEY) {
            Ok(v) => (v, false),
            Err(e) => {
                warn!(target: "trendbrief", error = %e, "theme preference unreadable, using memory only");
                (None, true)
            }
        };

        let dark = match stored.as_deref() {
            Some(v) => v == "dark",
            None => match probe.prefers_dark() {
                Ok(pref) => pref.unwrap_or(false),
                Err(e) => {
                    warn!(target: "trendbrief", error = %e, "color-scheme query failed, defaulting to light");
                    false
                }
            },
        };

        let mut ctl = Self {
            theme: if dark { Theme::Dark } else { Theme::Light },
            store,
            degraded: false,
        };
        if degraded {
            ctl.degrade();
        }
        ctl
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// True once persistent storage failed and the controller switched to
    /// an in-memory store.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Flip the theme and persist the new value. Never fails.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        if let Err(e) = self.store.set(THEME_KEY, self.theme.as_str()) {
            warn!(target: "trendbrief", error = %e, "theme preference not persisted, using memory only");
            self.degrade();
            // Memory store writes cannot fail short of a poisoned lock.
            let _ = self.store.set(THEME_KEY, self.theme.as_str());
        }
        info!(target: "trendbrief", theme = self.theme.as_str(), "theme toggled");
        self.theme
    }

    fn degrade(&mut self) {
        if !self.degraded {
            self.store = Arc::new(MemoryPreferenceStore::new());
            self.degraded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{FixedColorScheme, PrefsError, PrefsResult};

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> PrefsResult<Option<String>> {
            Err(PrefsError::Unavailable("no storage".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> PrefsResult<()> {
            Err(PrefsError::Unavailable("no storage".into()))
        }
    }

    struct ReadOnlyStore(Option<String>);

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> PrefsResult<Option<String>> {
            Ok(self.0.clone())
        }
        fn set(&self, _key: &str, _value: &str) -> PrefsResult<()> {
            Err(PrefsError::Unavailable("read-only".into()))
        }
    }

    #[test]
    fn toggle_cycle_persists_each_value() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut t = ThemeController::init(store.clone(), &FixedColorScheme(Some(false)));
        assert_eq!(t.theme(), Theme::Light);

        assert_eq!(t.toggle(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(t.toggle(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn system_preference_used_only_without_stored_value() {
        let empty = Arc::new(MemoryPreferenceStore::new());
        let t = ThemeController::init(empty, &FixedColorScheme(Some(true)));
        assert!(t.is_dark());

        let stored = Arc::new(MemoryPreferenceStore::new());
        stored.set(THEME_KEY, "light").unwrap();
        let t = ThemeController::init(stored, &FixedColorScheme(Some(true)));
        assert!(!t.is_dark());
    }

    #[test]
    fn unknown_stored_value_means_light() {
        let stored = Arc::new(MemoryPreferenceStore::new());
        stored.set(THEME_KEY, "solarized").unwrap();
        let t = ThemeController::init(stored, &FixedColorScheme(Some(true)));
        assert_eq!(t.theme(), Theme::Light);
    }

    #[test]
    fn unreadable_store_degrades_to_memory() {
        let mut t = ThemeController::init(Arc::new(BrokenStore), &FixedColorScheme(Some(true)));
        assert!(t.is_degraded());
        assert!(t.is_dark());
        assert_eq!(t.toggle(), Theme::Light);
        assert_eq!(t.toggle(), Theme::Dark);
    }

    #[test]
    fn failed_write_keeps_new_theme() {
        let mut t = ThemeController::init(
            Arc::new(ReadOnlyStore(Some("dark".into()))),
            &FixedColorScheme(None),
        );
        assert!(!t.is_degraded());
        assert_eq!(t.toggle(), Theme::Light);
        assert!(t.is_degraded());
        assert_eq!(t.theme().root_class(), "");
    }
}
