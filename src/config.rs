use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::compose::DEFAULT_DATE_FORMAT;
use crate::error::{Result, ServiceVersionError};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "serviceversion.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".serviceversion.toml";

/// Represents the complete configuration for service-version.
///
/// Every field is optional in the file; missing keys fall back to the
/// behavior of composing from `package.json` with a `%y%m%d` date stamp.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default = "default_version_field")]
    pub version_field: String,

    #[serde(default = "default_date_format")]
    pub date_format: String,
}

/// Returns the default manifest path, relative to the working directory.
fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

/// Returns the default top-level field holding the version string.
fn default_version_field() -> String {
    "version".to_string()
}

/// Returns the default date stamp format (two-digit year, month, day).
fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            version_field: default_version_field(),
            date_format: default_date_format(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `serviceversion.toml` in current directory
/// 3. `.serviceversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return load_config_file(&local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join(USER_CONFIG_FILE);
        if user.exists() {
            return load_config_file(&user);
        }
    }

    tracing::debug!("no configuration file found, using defaults");
    Ok(Config::default())
}

/// Reads and parses a single configuration file.
pub fn load_config_file(path: &Path) -> Result<Config> {
    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str =
        fs::read_to_string(path).map_err(|e| ServiceVersionError::file_access(path, e))?;
    toml::from_str(&config_str).map_err(|e| {
        ServiceVersionError::config(format!("invalid TOML in '{}': {}", path.display(), e))
    })
}
