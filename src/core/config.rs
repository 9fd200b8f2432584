//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::state::{DEFAULT_LOADING_DELAY, DEFAULT_SCROLL_TOP_THRESHOLD, ViewSettings};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub loading_delay_ms: Option<u64>,
    pub scroll_top_threshold: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub units_per_row: Option<u32>,
    pub compact_width: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Distance units one terminal row stands for (a 16px line).
pub const DEFAULT_UNITS_PER_ROW: u32 = 16;
/// Below this many columns the nav links collapse behind the menu button.
pub const DEFAULT_COMPACT_WIDTH: u16 = 100;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub loading_delay: Duration,
    pub scroll_top_threshold: u32,
    pub units_per_row: u32,
    pub compact_width: u16,
}

impl ResolvedConfig {
    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            loading_delay: self.loading_delay,
            scroll_top_threshold: self.scroll_top_threshold,
        }
    }
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub loading_delay_ms: Option<u64>,
    pub scroll_top_threshold: Option<u32>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FolioConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# loading_delay_ms = 2000          # Or set FOLIO_LOADING_DELAY_MS
# scroll_top_threshold = 300       # Or set FOLIO_SCROLL_TOP_THRESHOLD

# [display]
# units_per_row = 16               # Scroll distance one terminal row counts for
# compact_width = 100              # Collapse nav links into a menu below this width
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &FolioConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Loading delay: CLI → env → config → default
    let loading_delay = cli
        .loading_delay_ms
        .or_else(|| parse_env(&env, "FOLIO_LOADING_DELAY_MS"))
        .or(config.general.loading_delay_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_LOADING_DELAY);

    // Scroll threshold: CLI → env → config → default
    let scroll_top_threshold = cli
        .scroll_top_threshold
        .or_else(|| parse_env(&env, "FOLIO_SCROLL_TOP_THRESHOLD"))
        .or(config.general.scroll_top_threshold)
        .unwrap_or(DEFAULT_SCROLL_TOP_THRESHOLD);

    // A zero-unit row would make every offset 0
    let units_per_row = config
        .display
        .units_per_row
        .filter(|units| *units > 0)
        .unwrap_or(DEFAULT_UNITS_PER_ROW);

    ResolvedConfig {
        loading_delay,
        scroll_top_threshold,
        units_per_row,
        compact_width: config
            .display
            .compact_width
            .unwrap_or(DEFAULT_COMPACT_WIDTH),
    }
}

fn parse_env<T: std::str::FromStr>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}: not a number ({:?})", key, raw);
            None
        }
    }
}
