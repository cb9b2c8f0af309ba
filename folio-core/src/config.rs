//! Export settings, read from an optional TOML file.
//!
//! ```toml
//! compression_level = 9
//! max_entry_bytes = 1048576
//! default_theme = "galaxy"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{ExportError, ExportResult};
use crate::model::ThemeId;

const MIB: u64 = 1024 * 1024;

fn default_compression_level() -> i64 {
    6
}

fn default_max_entry_bytes() -> u64 {
    5 * MIB
}

fn default_max_archive_bytes() -> u64 {
    50 * MIB
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Deflate level, 0 (store-like) through 9 (smallest)
    #[serde(default = "default_compression_level")]
    pub compression_level: i64,
    /// Largest uncompressed size a single generated file may have
    #[serde(default = "default_max_entry_bytes")]
    pub max_entry_bytes: u64,
    /// Largest size of the finished archive
    #[serde(default = "default_max_archive_bytes")]
    pub max_archive_bytes: u64,
    /// Theme for records that do not name one
    #[serde(default)]
    pub default_theme: Option<ThemeId>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            compression_level: default_compression_level(),
            max_entry_bytes: default_max_entry_bytes(),
            max_archive_bytes: default_max_archive_bytes(),
            default_theme: None,
        }
    }
}

impl ExportConfig {
    pub fn from_toml_str(source: &str) -> ExportResult<Self> {
        let config: ExportConfig = toml::from_str(source)
            .map_err(|e| ExportError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given and present; otherwise the defaults
    pub fn load(path: Option<&Path>) -> ExportResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!("No export config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        info!("Loading export config from {:?}", path);
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> ExportResult<()> {
        if !(0..=9).contains(&self.compression_level) {
            return Err(ExportError::InvalidConfiguration(format!(
                "compression_level must be between 0 and 9, got {}",
                self.compression_level
            )));
        }
        if self.max_entry_bytes == 0 || self.max_archive_bytes == 0 {
            return Err(ExportError::InvalidConfiguration(
                "size limits must be greater than zero".to_string(),
            ));
        }
        if self.max_entry_bytes > self.max_archive_bytes {
            return Err(ExportError::InvalidConfiguration(format!(
                "max_entry_bytes ({}) exceeds max_archive_bytes ({})",
                self.max_entry_bytes, self.max_archive_bytes
            )));
        }
        Ok(())
    }
}
