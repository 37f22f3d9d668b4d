//! Gala event configuration loading from config.toml
//!
//! The event copy (name, date, venue, highlights) is presentation configuration. It is
//! read once at startup from the `[event]` table of a TOML file; any field left out
//! keeps its built-in default.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "GALA_CONFIG";
/// Config file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GalaConfig {
    /// Event details shown on tickets and status messages
    #[serde(default)]
    pub event: EventConfig,
}

/// Details of the gala itself
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Event name, used as the ticket heading
    pub name: String,
    /// Sub-heading
    pub tagline: String,
    /// Human-readable event date
    pub date: String,
    /// Host city
    pub city: String,
    /// Venue line printed on the ticket
    pub venue: String,
    /// Dress code printed on the ticket
    pub dress_code: String,
    /// Contact address for questions
    pub contact: String,
    /// Programme highlights
    pub highlights: Vec<String>,
    /// Headline statistics about the cause
    pub impact_goals: Vec<String>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            name: "Global Education Inequality Ball".to_string(),
            tagline: "A Biannual Gala for Global Education Equality".to_string(),
            date: "March 15, 2025".to_string(),
            city: "New York City".to_string(),
            venue: "The Plaza Hotel, New York".to_string(),
            dress_code: "Black-tie with educational theme elements".to_string(),
            contact: "info@globaleducationball.org".to_string(),
            highlights: vec![
                "Keynote: Malala Yousafzai".to_string(),
                "Performance: Global Youth Orchestra".to_string(),
                "Auction: Rare books & educational experiences".to_string(),
                "Awards: Global Education Champions".to_string(),
                "Networking: 500+ philanthropists & leaders".to_string(),
            ],
            impact_goals: vec![
                "250M children out of school".to_string(),
                "122M girls denied education".to_string(),
                "$5B funding gap annually".to_string(),
                "17 countries in crisis".to_string(),
            ],
        }
    }
}

/// Loads the gala configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GalaConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads the configuration, falling back to the defaults when the file is absent.
///
/// A file that exists but does not parse is still an error.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<GalaConfig> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        tracing::info!(
            "No config file at {}, using built-in event details",
            path_ref.display()
        );
        return Ok(GalaConfig::default());
    }
    load_config(path_ref)
}

/// Config file location: `$GALA_CONFIG`, or `./config.toml`.
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}
