//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.reel/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::tmdb::DEFAULT_TMDB_BASE_URL;
use crate::trending::AppwriteConfig;
use crate::trending::appwrite::DEFAULT_APPWRITE_ENDPOINT;
use crate::trending::recorder::DEFAULT_TRENDING_LIMIT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReelConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub trending: TrendingConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub api_token: Option<String>,
    pub base_url: Option<String>,
    pub image_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TrendingConfig {
    pub endpoint: Option<String>,
    pub project_id: Option<String>,
    pub database_id: Option<String>,
    pub collection_id: Option<String>,
    pub api_key: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    pub debounce_ms: Option<u64>,
    pub discard_stale: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub tmdb_api_token: Option<String>,
    pub tmdb_base_url: String,
    pub image_base_url: String,
    pub request_timeout: Duration,
    /// None = trending disabled (missing IDs or `--no-trending`).
    pub appwrite: Option<AppwriteConfig>,
    pub trending_limit: usize,
    pub debounce: Duration,
    pub discard_stale: bool,
    pub log_level: String,
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

/// Returns the path to `~/.reel/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".reel").join("config.toml"))
}

/// Load config from `path`, or from `~/.reel/config.toml` when `path` is None.
///
/// If the default file doesn't exist, generates a commented-out template and
/// returns `ReelConfig::default()`. An explicit path that doesn't exist is an
/// I/O error. A malformed file returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<ReelConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    info!("No config file found, generating default at {}", p.display());
                    generate_default_config(&p);
                    return Ok(ReelConfig::default());
                }
                p
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(ReelConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parses TOML config text. Secrets are not echoed to the log.
pub fn parse_config(contents: &str) -> Result<ReelConfig, ConfigError> {
    let config: ReelConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;
    debug!(
        "Config: general={:?} search={:?} catalog.base_url={:?} trending.endpoint={:?}",
        config.general, config.search, config.catalog.base_url, config.trending.endpoint
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Reel Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "error", "warn", "info", "debug", "trace" (or REEL_LOG)

# [catalog]
# api_token = "eyJhbGciOi..."        # TMDB read access token (or TMDB_API_KEY env var)
# base_url = "https://api.themoviedb.org/3"
# image_base_url = "https://image.tmdb.org/t/p/w500"
# timeout_secs = 15

# [trending]
# endpoint = "https://cloud.appwrite.io/v1"   # Or APPWRITE_ENDPOINT
# project_id = "..."                 # Or APPWRITE_PROJECT_ID
# database_id = "..."                # Or APPWRITE_DATABASE_ID
# collection_id = "..."              # Or APPWRITE_COLLECTION_ID
# api_key = "..."                    # Or APPWRITE_API_KEY (optional)
# limit = 5

# [search]
# debounce_ms = 500
# discard_stale = false              # true = ignore results of superseded searches
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
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
/// `no_trending` is the `--no-trending` CLI flag.
pub fn resolve(config: &ReelConfig, no_trending: bool) -> ResolvedConfig {
    resolve_with_env(config, no_trending, |key| std::env::var(key).ok())
}

/// Same as `resolve`, reading environment variables through `env`.
pub fn resolve_with_env<F>(config: &ReelConfig, no_trending: bool, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // TMDB token: env → config
    let tmdb_api_token = env("TMDB_API_KEY").or_else(|| config.catalog.api_token.clone());

    // TMDB base URL: env → config → default
    let tmdb_base_url = env("TMDB_BASE_URL")
        .or_else(|| config.catalog.base_url.clone())
        .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string());

    let appwrite = if no_trending {
        None
    } else {
        resolve_appwrite(config, &env)
    };

    let log_level = env("REEL_LOG")
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        tmdb_api_token,
        tmdb_base_url,
        image_base_url: config
            .catalog
            .image_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string()),
        request_timeout: Duration::from_secs(
            config.catalog.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        ),
        appwrite,
        trending_limit: config.trending.limit.unwrap_or(DEFAULT_TRENDING_LIMIT),
        debounce: Duration::from_millis(config.search.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS)),
        discard_stale: config.search.discard_stale.unwrap_or(false),
        log_level,
    }
}

/// Appwrite settings: each field env → config. All three IDs are required;
/// if any is missing, trending is disabled.
fn resolve_appwrite<F>(config: &ReelConfig, env: &F) -> Option<AppwriteConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let trending = &config.trending;
    let project_id = env("APPWRITE_PROJECT_ID").or_else(|| trending.project_id.clone());
    let database_id = env("APPWRITE_DATABASE_ID").or_else(|| trending.database_id.clone());
    let collection_id = env("APPWRITE_COLLECTION_ID").or_else(|| trending.collection_id.clone());

    match (project_id, database_id, collection_id) {
        (Some(project_id), Some(database_id), Some(collection_id)) => Some(AppwriteConfig {
            endpoint: env("APPWRITE_ENDPOINT")
                .or_else(|| trending.endpoint.clone())
                .unwrap_or_else(|| DEFAULT_APPWRITE_ENDPOINT.to_string()),
            project_id,
            database_id,
            collection_id,
            api_key: env("APPWRITE_API_KEY").or_else(|| trending.api_key.clone()),
        }),
        _ => {
            info!("Trending store not configured (need project, database and collection IDs)");
            None
        }
    }
}
