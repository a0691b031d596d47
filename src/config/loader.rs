//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PSEUDOLENS_CONFIG";
/// Environment variable overriding the bind host.
pub const HOST_ENV: &str = "PSEUDOLENS_HOST";
/// Environment variable overriding the bind port.
pub const PORT_ENV: &str = "PSEUDOLENS_PORT";
/// Environment variable overriding debug mode.
pub const DEBUG_ENV: &str = "PSEUDOLENS_DEBUG";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/pseudolens/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Interface to bind (e.g., "127.0.0.1", "0.0.0.0").
    #[serde(default)]
    pub host: Option<String>,

    /// TCP port to listen on.
    #[serde(default)]
    pub port: Option<u16>,

    /// Debug mode: lowers the default log filter to `debug`.
    #[serde(default)]
    pub debug: Option<bool>,

    /// Path to a log file. Logs go to stderr when unset.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Permissive CORS on every route.
    #[serde(default)]
    pub cors: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Debug mode.
    pub debug: bool,
    /// Log file; `None` means stderr.
    pub log_file_path: Option<PathBuf>,
    /// Permissive CORS.
    pub cors: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            debug: false,
            log_file_path: None,
            cors: true,
        }
    }
}

impl ResolvedConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/pseudolens/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pseudolens").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PSEUDOLENS_CONFIG` environment variable
/// 3. Default path `~/.config/pseudolens/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        host: config.host.unwrap_or(defaults.host),
        port: config.port.unwrap_or(defaults.port),
        debug: config.debug.unwrap_or(defaults.debug),
        log_file_path: config.log_file_path.or(defaults.log_file_path),
        cors: config.cors.unwrap_or(defaults.cors),
    }
}

/// An environment override that was present but could not be parsed.
///
/// Env overrides are resolved before the tracing subscriber exists, so the
/// caller reports these once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEnvVar {
    /// Name of the environment variable.
    pub name: &'static str,
    /// Raw value as found in the environment.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl RejectedEnvVar {
    /// Emit the rejection as a `warn` event.
    pub fn log(&self) {
        warn!(value = %self.value, error = %self.reason, "Ignoring invalid {}", self.name);
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PSEUDOLENS_HOST`: bind host
/// - `PSEUDOLENS_PORT`: bind port (ignored if not a valid port)
/// - `PSEUDOLENS_DEBUG`: `1`/`true`/`0`/`false` (ignored otherwise)
///
/// Ignored values are returned alongside the config.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> (ResolvedConfig, Vec<RejectedEnvVar>) {
    let mut rejected = Vec::new();

    if let Ok(host) = std::env::var(HOST_ENV) {
        config.host = host;
    }

    if let Ok(raw) = std::env::var(PORT_ENV) {
        match raw.trim().parse::<u16>() {
            Ok(port) => config.port = port,
            Err(e) => rejected.push(RejectedEnvVar {
                name: PORT_ENV,
                reason: e.to_string(),
                value: raw,
            }),
        }
    }

    if let Ok(raw) = std::env::var(DEBUG_ENV) {
        match parse_flag(&raw) {
            Some(debug) => config.debug = debug,
            None => rejected.push(RejectedEnvVar {
                name: DEBUG_ENV,
                reason: "expected one of 1, true, yes, on, 0, false, no, off".to_string(),
                value: raw,
            }),
        }
    }

    (config, rejected)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    host_override: Option<String>,
    port_override: Option<u16>,
    debug_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(host) = host_override {
        config.host = host;
    }

    if let Some(port) = port_override {
        config.port = port;
    }

    if let Some(debug) = debug_override {
        config.debug = debug;
    }

    config
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
