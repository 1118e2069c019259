// src/prefs.rs
//! Persistent key-value preferences and host capability probes.
//!
//! The UI keeps exactly one preference (`"theme"`), but access goes through
//! `PreferenceStore` so a host without writable storage reports an error
//! instead of aborting the request. Callers decide how to degrade.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

pub const ENV_PREFERS_COLOR_SCHEME: &str = "TRENDBRIEF_PREFERS_COLOR_SCHEME";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),

    #[error("preference file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

pub type PrefsResult<T> = Result<T, PrefsError>;

/// Browser-local-storage–like string store.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> PrefsResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PrefsResult<()>;
}

/// Process-local store; also the fallback when persistent storage fails.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> PrefsResult<Option<String>> {
        let g = self
            .data
            .read()
            .map_err(|_| PrefsError::Unavailable("memory store lock poisoned".into()))?;
        Ok(g.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        let mut g = self
            .data
            .write()
            .map_err(|_| PrefsError::Unavailable("memory store lock poisoned".into()))?;
        g.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsFile {
    #[serde(flatten)]
    entries: BTreeMap<String, String>,
}

/// JSON file store (`{"theme": "dark"}`). Every `set` rewrites the file;
/// last write wins.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> PrefsResult<PrefsFile> {
        match fs::read_to_string(&self.path) {
            Ok(s) if s.trim().is_empty() => Ok(PrefsFile::default()),
            Ok(s) => Ok(serde_json::from_str(&s)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(PrefsFile::default()),
            Err(source) => Err(PrefsError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> PrefsResult<Option<String>> {
        Ok(self.read_all()?.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        let mut file = self.read_all().unwrap_or_default();
        file.entries.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| PrefsError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let body = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, body).map_err(|source| PrefsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Host query for the system-level color-scheme preference.
/// `Ok(None)` means the host answered but has no preference.
pub trait ColorSchemeProbe: Send + Sync {
    fn prefers_dark(&self) -> PrefsResult<Option<bool>>;
}

/// Fixed answer; used for configured schemes and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedColorScheme(pub Option<bool>);

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> PrefsResult<Option<bool>> {
        Ok(self.0)
    }
}

/// Reads `TRENDBRIEF_PREFERS_COLOR_SCHEME` (`dark` | `light`).
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColorScheme;

impl ColorSchemeProbe for EnvColorScheme {
    fn prefers_dark(&self) -> PrefsResult<Option<bool>> {
        match std::env::var(ENV_PREFERS_COLOR_SCHEME) {
            Ok(v) => Ok(parse_scheme(&v)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(PrefsError::Unavailable(e.to_string())),
        }
    }
}

/// `Some(true)` for dark, `Some(false)` for light, `None` otherwise.
pub fn parse_scheme(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}
