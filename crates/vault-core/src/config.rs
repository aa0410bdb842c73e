use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CREATE_LATENCY_MS: u64 = 500;
const DEFAULT_SIGN_IN_LATENCY_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewModePreference {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulated round-trip before a created folder or item becomes visible.
    #[serde(default)]
    pub create_latency_ms: Option<u64>,
    #[serde(default)]
    pub sign_in_latency_ms: Option<u64>,
    #[serde(default)]
    pub default_view_mode: Option<ViewModePreference>,
    #[serde(default)]
    pub seed_mock_data: Option<bool>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/contentvault/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("contentvault/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("contentvault\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Reads a config file, falling back to defaults when it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn effective_create_latency_ms(&self) -> u64 {
        self.create_latency_ms.unwrap_or(DEFAULT_CREATE_LATENCY_MS)
    }

    pub fn effective_sign_in_latency_ms(&self) -> u64 {
        self.sign_in_latency_ms
            .unwrap_or(DEFAULT_SIGN_IN_LATENCY_MS)
    }

    pub fn effective_view_mode(&self) -> ViewModePreference {
        self.default_view_mode.unwrap_or_default()
    }

    pub fn effective_seed_mock_data(&self) -> bool {
        self.seed_mock_data.unwrap_or(true)
    }
}
