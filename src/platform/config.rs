// FollowCheck - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::{ConfigError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for FollowCheck configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/followcheck/ or %APPDATA%\FollowCheck\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of config.toml inside the config directory.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[input]` section.
    pub input: InputSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[input]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct InputSection {
    /// Largest document file accepted, in bytes.
    pub max_document_bytes: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Largest document file accepted, in bytes.
    pub max_document_bytes: u64,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: constants::DEFAULT_MAX_DOCUMENT_BYTES,
            log_level: None,
        }
    }
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal problems.
/// A missing file yields defaults with no warnings (first run). An unreadable
/// or unparseable file yields defaults plus one warning; out-of-range values
/// fall back individually.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match read_raw(config_path) {
        Ok(raw) => validate(raw),
        Err(e) => (AppConfig::default(), vec![e]),
    }
}

/// Load a config file the user named explicitly.
///
/// Unlike `load_config`, a missing, unreadable or unparseable file is an
/// error rather than a silent fallback. Out-of-range values still fall back
/// individually and come back as warnings.
pub fn load_config_required(config_path: &Path) -> Result<(AppConfig, Vec<ConfigError>)> {
    let raw = read_raw(config_path)?;
    Ok(validate(raw))
}

fn read_raw(config_path: &Path) -> std::result::Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;

    let raw = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %config_path.display(), "Loaded config.toml");
    Ok(raw)
}

/// Validate each raw field against named constants, accumulating all problems.
fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- Input: max_document_bytes --
    if let Some(bytes) = raw.input.max_document_bytes {
        if (constants::MIN_MAX_DOCUMENT_BYTES..=constants::ABSOLUTE_MAX_DOCUMENT_BYTES)
            .contains(&bytes)
        {
            config.max_document_bytes = bytes;
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "[input] max_document_bytes".to_string(),
                value: bytes.to_string(),
                expected: format!(
                    "{}-{} (using default {})",
                    constants::MIN_MAX_DOCUMENT_BYTES,
                    constants::ABSOLUTE_MAX_DOCUMENT_BYTES,
                    constants::DEFAULT_MAX_DOCUMENT_BYTES,
                ),
            });
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level,
                expected: format!(
                    "one of {} (using default {})",
                    constants::VALID_LOG_LEVELS.join(", "),
                    constants::DEFAULT_LOG_LEVEL,
                ),
            });
        }
    }

    (config, warnings)
}
