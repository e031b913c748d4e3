use crate::error::Result;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "toolutil.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".toolutil.toml";

/// Represents the complete configuration for tool-util.
///
/// Contains the environment override table used when rendering templates and
/// an optional platform override for binary naming.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub env: HashMap<String, String>,

    #[serde(default)]
    pub platform: PlatformConfig,
}

/// Platform selection for binary naming.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct PlatformConfig {
    /// OS name such as "windows" or "linux"; the host platform when unset
    #[serde(default)]
    pub os: Option<String>,
}

impl Config {
    /// Platform to use for binary naming, honoring the configured override
    pub fn platform(&self) -> Platform {
        match self.platform.os.as_deref() {
            Some(os) => Platform::from_os(os),
            None => Platform::current(),
        }
    }

    /// Environment overrides with `extra` taking precedence over `[env]`
    pub fn env_overrides<I>(&self, extra: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut merged = self.env.clone();
        merged.extend(extra);
        merged
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `toolutil.toml` in current directory
/// 3. `.toolutil.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        debug!(path, "loading config");
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        debug!(path = LOCAL_CONFIG_FILE, "loading config");
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            debug!(path = %config_path.display(), "loading config");
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text
pub fn parse_config(text: &str) -> Result<Config> {
    Ok(toml::from_str(text)?)
}
