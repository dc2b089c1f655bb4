//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dexter/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DexterConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub page_limit: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub page_limit: u32,
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

/// Returns the path to `~/.dexter/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dexter").join("config.toml"))
}

/// Load config from `~/.dexter/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DexterConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DexterConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DexterConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DexterConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: DexterConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Dexter Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://pokeapi.co/api/v2"   # Or set POKEAPI_BASE_URL env var
# page_limit = 20                          # Or set DEXTER_PAGE_LIMIT env var
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
///
/// `cli_base_url` and `cli_limit` are from CLI flags (None = not specified).
pub fn resolve(
    config: &DexterConfig,
    cli_base_url: Option<&str>,
    cli_limit: Option<u32>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("POKEAPI_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Page limit: CLI → env → config → default
    let page_limit = cli_limit
        .or_else(|| {
            std::env::var("DEXTER_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or_else(|| config.api.page_limit)
        .unwrap_or(DEFAULT_PAGE_LIMIT);

    ResolvedConfig {
        base_url,
        page_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = DexterConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.api.page_limit.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = DexterConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.page_limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = DexterConfig {
            api: ApiConfig {
                base_url: Some("http://localhost:9000/api/v2".to_string()),
                page_limit: Some(50),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, "http://localhost:9000/api/v2");
        assert_eq!(resolved.page_limit, 50);
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = DexterConfig {
            api: ApiConfig {
                base_url: Some("http://from-config".to_string()),
                page_limit: Some(50),
            },
        };
        let resolved = resolve(&config, Some("http://from-cli"), Some(5));
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.page_limit, 5);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[api]
page_limit = 40
"#;
        let config: DexterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.page_limit, Some(40));
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[api]
base_url = "https://pokeapi.co/api/v2"
page_limit = 20
"#;
        let config: DexterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://pokeapi.co/api/v2")
        );
        assert_eq!(config.api.page_limit, Some(20));
    }
}
