//! Configuration management for SmartMenu.
//!
//! Loads configuration from ${SMARTMENU_HOME}/config.toml with sensible defaults.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returned when a theme color is not a `#RRGGBB` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}': expected #RRGGBB")]
pub struct InvalidColor(pub String);

/// An sRGB color written as `#RRGGBB` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (the leading `#` is optional, case-insensitive).
    pub fn parse(raw: &str) -> Result<Self, InvalidColor> {
        let hex = raw.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidColor(raw.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| InvalidColor(raw.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.to_string()
    }
}

/// Palette handed to the presentation layer at construction.
///
/// The login controller never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Borders, focused field, submit button.
    pub primary: HexColor,
    /// Brand name and success accents.
    pub secondary: HexColor,
    /// Links and the loading spinner.
    pub accent: HexColor,
    /// Text on top of filled buttons.
    pub surface: HexColor,
    /// Background of the notice dialog.
    pub overlay: HexColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: HexColor::new(0x01, 0x61, 0x77),
            secondary: HexColor::new(0x17, 0x80, 0x4F),
            accent: HexColor::new(0xF9, 0x86, 0x08),
            surface: HexColor::new(0xFF, 0xFF, 0xFF),
            overlay: HexColor::new(0xF3, 0xF3, 0xDC),
        }
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for SmartMenu configuration and data directories.
    //!
    //! SMARTMENU_HOME resolution order:
    //! 1. SMARTMENU_HOME environment variable (if set)
    //! 2. ~/.config/smartmenu (default)
    //! 3. ./.smartmenu when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the SmartMenu home directory.
    pub fn smartmenu_home() -> PathBuf {
        if let Ok(home) = std::env::var("SMARTMENU_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".smartmenu"),
            |h| h.join(".config").join("smartmenu"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        smartmenu_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        smartmenu_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name shown in the header of the sign-in screen
    pub brand_name: String,

    /// Simulated latency of a sign-in attempt, in milliseconds
    pub submit_delay_ms: u64,

    /// Log filter used when RUST_LOG is not set
    pub log_level: String,

    /// Colors of the sign-in screen
    pub theme: ThemeConfig,
}

impl Config {
    const DEFAULT_BRAND_NAME: &str = "SmartMenu";
    const DEFAULT_SUBMIT_DELAY_MS: u64 = 900;
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to `path`.
    ///
    /// Creates parent directories. Fails if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Delay of the stub sign-in backend.
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand_name: Self::DEFAULT_BRAND_NAME.to_string(),
            submit_delay_ms: Self::DEFAULT_SUBMIT_DELAY_MS,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
            theme: ThemeConfig::default(),
        }
    }
}
