// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::prefs::{ColorSchemeProbe, EnvColorScheme, FixedColorScheme};

pub const DEFAULT_CONFIG_PATH: &str = "config/trendbrief.toml";
pub const DEFAULT_PREFS_PATH: &str = "state/preferences.json";

pub const ENV_CONFIG_PATH: &str = "TRENDBRIEF_CONFIG_PATH";
pub const ENV_FIXTURES_PATH: &str = "TRENDBRIEF_FIXTURES_PATH";
pub const ENV_PREFS_PATH: &str = "TRENDBRIEF_PREFS_PATH";

fn default_prefs_path() -> PathBuf {
    PathBuf::from(DEFAULT_PREFS_PATH)
}

/// Where the startup color scheme comes from when no preference is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemeSetting {
    Light,
    Dark,
    /// Ask the host (`TRENDBRIEF_PREFERS_COLOR_SCHEME`).
    #[default]
    System,
}

impl ColorSchemeSetting {
    pub fn probe(self) -> Box<dyn ColorSchemeProbe> {
        match self {
            ColorSchemeSetting::Light => Box::new(FixedColorScheme(Some(false))),
            ColorSchemeSetting::Dark => Box::new(FixedColorScheme(Some(true))),
            ColorSchemeSetting::System => Box::new(EnvColorScheme),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// JSON fixture override; built-in seed when absent.
    #[serde(default)]
    pub fixtures_path: Option<PathBuf>,
    #[serde(default = "default_prefs_path")]
    pub prefs_path: PathBuf,
    #[serde(default)]
    pub color_scheme: ColorSchemeSetting,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixtures_path: None,
            prefs_path: default_prefs_path(),
            color_scheme: ColorSchemeSetting::System,
        }
    }
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let cfg: AppConfig =
            toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
        Ok(cfg)
    }

    /// Load config using env var + fallbacks, then apply env overrides:
    /// 1) $TRENDBRIEF_CONFIG_PATH (must exist)
    /// 2) config/trendbrief.toml
    /// 3) built-in defaults
    pub fn load_default() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
            Self::load_from_file(&pb)?
        } else {
            let p = PathBuf::from(DEFAULT_CONFIG_PATH);
            if p.exists() {
                Self::load_from_file(&p)?
            } else {
                Self::default()
            }
        };
        cfg.apply_env();
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Some(p) = non_empty_env(ENV_FIXTURES_PATH) {
            self.fixtures_path = Some(PathBuf::from(p));
        }
        if let Some(p) = non_empty_env(ENV_PREFS_PATH) {
            self.prefs_path = PathBuf::from(p);
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
