//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.showroom/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::core::scroll::{DEFAULT_ELEVATE_AFTER, DEFAULT_SCROLL_THRESHOLD};
use crate::core::showcase::DEFAULT_REGION_THRESHOLD;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShowroomConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub showcase: ShowcaseConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub scroll_threshold: Option<u32>,
    pub elevate_after: Option<u32>,
    pub frame_rate: Option<u32>,
    pub mobile_breakpoint: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShowcaseConfig {
    pub region_threshold: Option<f32>,
    pub catalog_file: Option<String>,
    pub clip_seconds: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactConfig {
    pub submit_timeout_secs: Option<u64>,
    pub outbox: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_FRAME_RATE: u32 = 30;
pub const DEFAULT_MOBILE_BREAKPOINT: u16 = 80;
pub const DEFAULT_CLIP_SECONDS: u64 = 8;
pub const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_OUTBOX_FILE: &str = "outbox.jsonl";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub scroll_threshold: u32,
    pub elevate_after: u32,
    pub frame_rate: u32,
    pub mobile_breakpoint: u16,
    pub region_threshold: f32,
    pub catalog_file: Option<PathBuf>,
    pub clip_length: Duration,
    pub submit_timeout: Duration,
    pub outbox: PathBuf,
}

impl ResolvedConfig {
    /// Time budget for one frame at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.frame_rate.max(1)))
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&ShowroomConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub scroll_threshold: Option<u32>,
    pub catalog_file: Option<PathBuf>,
    pub outbox: Option<PathBuf>,
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

/// Returns the path to `~/.showroom/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".showroom"))
}

/// Returns the path to `~/.showroom/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.showroom/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ShowroomConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ShowroomConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ShowroomConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ShowroomConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<ShowroomConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ShowroomConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Showroom Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# scroll_threshold = 10        # Rows of travel before the header reacts (SHOWROOM_SCROLL_THRESHOLD)
# elevate_after = 50           # Header gets its shadow past this offset
# frame_rate = 30              # Scroll samples are evaluated at most once per frame
# mobile_breakpoint = 80       # Below this many columns the showcase becomes carousels

# [showcase]
# region_threshold = 0.5       # Fraction of a group's region that must be on screen
# catalog_file = "catalog.toml" # Relative to ~/.showroom/ (SHOWROOM_CATALOG)
# clip_seconds = 8             # Length of one simulated clip loop

# [contact]
# submit_timeout_secs = 15     # Form unlocks with a failure notice after this (SHOWROOM_SUBMIT_TIMEOUT)
# outbox = "outbox.jsonl"      # Relative to ~/.showroom/ (SHOWROOM_OUTBOX)
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
pub fn resolve(config: &ShowroomConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup supplied by the caller.
pub fn resolve_with_env<F>(config: &ShowroomConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let parsed = |key: &str| -> Option<u64> {
        let raw = env(key)?;
        match u64::from_str(raw.trim()) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!("Ignoring {key}={raw:?}: not a whole number");
                None
            }
        }
    };

    // Threshold: CLI → env → config → default
    let scroll_threshold = cli
        .scroll_threshold
        .or_else(|| parsed("SHOWROOM_SCROLL_THRESHOLD").and_then(|v| u32::try_from(v).ok()))
        .or(config.general.scroll_threshold)
        .unwrap_or(DEFAULT_SCROLL_THRESHOLD);

    // Catalog: CLI → env → config → built-in
    let catalog_file = cli
        .catalog_file
        .clone()
        .or_else(|| env("SHOWROOM_CATALOG").map(PathBuf::from))
        .or_else(|| config.showcase.catalog_file.as_deref().map(relative_to_config_dir));

    // Outbox: CLI → env → config → default
    let outbox = cli
        .outbox
        .clone()
        .or_else(|| env("SHOWROOM_OUTBOX").map(PathBuf::from))
        .unwrap_or_else(|| {
            relative_to_config_dir(
                config
                    .contact
                    .outbox
                    .as_deref()
                    .unwrap_or(DEFAULT_OUTBOX_FILE),
            )
        });

    let submit_timeout_secs = parsed("SHOWROOM_SUBMIT_TIMEOUT")
        .or(config.contact.submit_timeout_secs)
        .unwrap_or(DEFAULT_SUBMIT_TIMEOUT_SECS);

    let region_threshold = match config.showcase.region_threshold {
        Some(t) if t > 0.0 && t <= 1.0 => t,
        Some(t) => {
            warn!("region_threshold {t} out of range (0, 1], using default");
            DEFAULT_REGION_THRESHOLD
        }
        None => DEFAULT_REGION_THRESHOLD,
    };

    ResolvedConfig {
        scroll_threshold,
        elevate_after: config
            .general
            .elevate_after
            .unwrap_or(DEFAULT_ELEVATE_AFTER),
        frame_rate: config.general.frame_rate.unwrap_or(DEFAULT_FRAME_RATE).max(1),
        mobile_breakpoint: config
            .general
            .mobile_breakpoint
            .unwrap_or(DEFAULT_MOBILE_BREAKPOINT),
        region_threshold,
        catalog_file,
        clip_length: Duration::from_secs(
            config
                .showcase
                .clip_seconds
                .unwrap_or(DEFAULT_CLIP_SECONDS)
                .max(1),
        ),
        submit_timeout: Duration::from_secs(submit_timeout_secs.max(1)),
        outbox,
    }
}

/// Relative paths in the config file are anchored at `~/.showroom/`.
fn relative_to_config_dir(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = ShowroomConfig::default();
        assert!(config.general.scroll_threshold.is_none());
        assert!(config.showcase.catalog_file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&ShowroomConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.scroll_threshold, DEFAULT_SCROLL_THRESHOLD);
        assert_eq!(resolved.elevate_after, DEFAULT_ELEVATE_AFTER);
        assert_eq!(resolved.region_threshold, DEFAULT_REGION_THRESHOLD);
        assert_eq!(resolved.submit_timeout, Duration::from_secs(15));
        assert!(resolved.catalog_file.is_none());
        assert!(resolved.outbox.ends_with(DEFAULT_OUTBOX_FILE));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ShowroomConfig {
            general: GeneralConfig {
                scroll_threshold: Some(4),
                elevate_after: Some(20),
                frame_rate: Some(60),
                mobile_breakpoint: Some(100),
            },
            contact: ContactConfig {
                submit_timeout_secs: Some(3),
                outbox: Some("/tmp/enquiries.jsonl".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.scroll_threshold, 4);
        assert_eq!(resolved.elevate_after, 20);
        assert_eq!(resolved.mobile_breakpoint, 100);
        assert_eq!(resolved.frame_interval(), Duration::from_millis(16));
        assert_eq!(resolved.submit_timeout, Duration::from_secs(3));
        assert_eq!(resolved.outbox, PathBuf::from("/tmp/enquiries.jsonl"));
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = ShowroomConfig {
            general: GeneralConfig {
                scroll_threshold: Some(4),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "SHOWROOM_SCROLL_THRESHOLD" => Some("7".to_string()),
            "SHOWROOM_SUBMIT_TIMEOUT" => Some("2".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.scroll_threshold, 7);
        assert_eq!(resolved.submit_timeout, Duration::from_secs(2));

        let cli = CliOverrides {
            scroll_threshold: Some(12),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.scroll_threshold, 12);
    }

    #[test]
    fn test_garbage_env_is_ignored() {
        let env = |key: &str| (key == "SHOWROOM_SCROLL_THRESHOLD").then(|| "lots".to_string());
        let resolved = resolve_with_env(&ShowroomConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.scroll_threshold, DEFAULT_SCROLL_THRESHOLD);
    }

    #[test]
    fn test_out_of_range_region_threshold_falls_back() {
        let config = ShowroomConfig {
            showcase: ShowcaseConfig {
                region_threshold: Some(1.5),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.region_threshold, DEFAULT_REGION_THRESHOLD);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
scroll_threshold = 12
frame_rate = 24

[showcase]
region_threshold = 0.6
catalog_file = "/etc/showroom/catalog.toml"
clip_seconds = 5

[contact]
submit_timeout_secs = 30
"#;
        let config: ShowroomConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.scroll_threshold, Some(12));
        assert_eq!(config.showcase.region_threshold, Some(0.6));
        assert_eq!(config.contact.submit_timeout_secs, Some(30));

        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(
            resolved.catalog_file,
            Some(PathBuf::from("/etc/showroom/catalog.toml"))
        );
        assert_eq!(resolved.clip_length, Duration::from_secs(5));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[contact]
outbox = "leads.jsonl"
"#;
        let config: ShowroomConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.contact.outbox.as_deref(), Some("leads.jsonl"));
        assert!(config.general.frame_rate.is_none());
        assert!(config.showcase.region_threshold.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("showroom-config-{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, "[general\nscroll_threshold = ").unwrap();
        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&path);
    }
}
