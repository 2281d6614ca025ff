//! Registrar configuration via `registrar.toml`
//!
//! The file sets the default log filter and optionally lists seed
//! students and courses that are created at startup, in file order,
//! through the same validated paths as any other request.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up by the CLI when no path is given.
pub const CONFIG_FILE_NAME: &str = "registrar.toml";

/// Errors raised while loading configuration or applying seed data
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read or written
    #[error("Failed to access config file '{}': {source}", .path.display())]
    Io {
        /// File that was accessed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`RegistrarConfig`]
    #[error("Failed to parse config '{origin}': {source}")]
    Parse {
        /// File path, or `<inline>` for string input
        origin: String,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// A seed entry was refused by validation or the domain logic
    #[error("Seed entry {entry} was refused: {source}")]
    Seed {
        /// Which entry, e.g. `students[2]`
        entry: String,
        /// Why it was refused
        source: crate::Error,
    },
}

/// A student created at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentSeed {
    /// Student name
    pub name: String,
    /// Student email
    pub email: String,
}

/// A course created at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseSeed {
    /// Course code
    pub code: String,
    /// Course title
    pub title: String,
    /// Instructor name
    pub instructor: String,
}

/// Registrar configuration loaded from `registrar.toml`.
///
/// # Example
///
/// ```toml
/// log = "info"
///
/// [[students]]
/// name = "Ann"
/// email = "ann@x.com"
///
/// [[courses]]
/// code = "CS101"
/// title = "Intro to CS"
/// instructor = "Dr. Smith"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrarConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log")]
    pub log: String,
    /// Students created at startup.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub students: Vec<StudentSeed>,
    /// Courses created at startup.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<CourseSeed>,
}

fn default_log() -> String {
    "info".to_string()
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            log: default_log(),
            students: Vec::new(),
            courses: Vec::new(),
        }
    }
}

impl RegistrarConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Registrar configuration
#
# Log filter used when RUST_LOG is not set (tracing EnvFilter syntax).
log = "info"

# Seed data created at startup, in order. A duplicate email or code
# aborts startup.
#
# [[students]]
# name = "Ann"
# email = "ann@x.com"
#
# [[courses]]
# code = "CS101"
# title = "Intro to CS"
# instructor = "Dr. Smith"
"#
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            origin: "<inline>".to_string(),
            source,
        })
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            origin: path.display().to_string(),
            source,
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}
