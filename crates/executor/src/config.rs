//! Service configuration via `crmsim.toml`
//!
//! Every setting has a default, so an empty file (or no file) gives the
//! stock service. Loading fails with a configuration error on unreadable
//! files, bad TOML or unknown setting values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::registry::RegistrationPolicy;
use crate::{Error, Result};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "crmsim.toml";

/// Service configuration loaded from `crmsim.toml`.
///
/// # Example
///
/// ```toml
/// # Duplicate executor registration: "reject" (default) or "first_match"
/// registration = "reject"
///
/// # Register the built-in message executors (default: true)
/// builtin_executors = true
///
/// # Cap on rows returned by retrieve_multiple (default: unlimited).
/// # Fluent create_query views are not capped.
/// # max_query_results = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Registration policy: `"reject"` or `"first_match"`.
    #[serde(default = "default_registration_str")]
    pub registration: String,
    /// Register the built-in executors on construction.
    #[serde(default = "default_true")]
    pub builtin_executors: bool,
    /// Cap on the rows any `retrieve_multiple` returns. Fluent queries from
    /// `create_query` are not capped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_query_results: Option<usize>,
}

fn default_registration_str() -> String {
    "reject".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            registration: default_registration_str(),
            builtin_executors: true,
            max_query_results: None,
        }
    }
}

impl ServiceConfig {
    /// Parse the registration string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"reject"` or `"first_match"`.
    pub fn registration_policy(&self) -> Result<RegistrationPolicy> {
        RegistrationPolicy::parse(&self.registration).ok_or_else(|| {
            Error::configuration(format!(
                "Invalid registration policy '{}' in {}. Expected \"reject\" or \"first_match\".",
                self.registration, CONFIG_FILE_NAME
            ))
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# crmsim service configuration
#
# Duplicate executor registration: "reject" (default) or "first_match"
#   "reject"      = registering a second executor for a request name fails
#   "first_match" = accepted; the executor registered first keeps winning
registration = "reject"

# Register the built-in message executors (default: true)
builtin_executors = true

# Cap on rows returned by retrieve_multiple (default: unlimited).
# Fluent create_query views are not capped.
# max_query_results = 5000
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this config or a
    /// value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ServiceConfig = toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;
        config.registration_policy()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Configuration { reason } => {
                Error::configuration(format!("{} ({})", reason, path.display()))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Internal {
                    reason: format!(
                        "Failed to write default config file '{}': {}",
                        path.display(),
                        e
                    ),
                }
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Internal {
            reason: format!("Failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| Error::Internal {
            reason: format!("Failed to write config file '{}': {}", path.display(), e),
        })
    }
}
