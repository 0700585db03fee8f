//! # Application configuration — `rollcall.toml`
//!
//! Defines the TOML configuration document for the app (filename:
//! [`RollcallConfig::filename`] = `"rollcall.toml"`). There is no persistence
//! layer; platforms install the default configuration at startup and the
//! document format exists so deployments can ship one alongside the app.
//!
//! ```toml
//! [display]
//! date_format = "%-m/%-d/%Y"   # chrono format for birth dates in the table
//! ```
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `rollcall.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RollcallConfig {
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// chrono format string used for birth dates in the records table.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl RollcallConfig {
    /// Create a config with the given date format.
    pub fn new(date_format: String) -> Self {
        Self {
            display: DisplayConfig { date_format },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "rollcall.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
