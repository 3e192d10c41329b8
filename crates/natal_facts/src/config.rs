//! Fact-store configuration.

use std::path::PathBuf;

use crate::error::{ConfigError, StoreError};
use crate::memory::InMemoryFactStore;
use crate::sheet::FactSheet;

/// Environment variable naming a JSON fact sheet.
pub const FACTS_PATH_ENV: &str = "NATAL_FACTS_PATH";

/// Where reference facts come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FactSource {
    /// Built-in classical tables.
    #[default]
    Canonical,
    /// JSON fact sheet on disk.
    JsonFile(PathBuf),
}

/// Store configuration used at startup time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FactStoreConfig {
    pub source: FactSource,
}

impl FactStoreConfig {
    pub fn canonical() -> Self {
        Self {
            source: FactSource::Canonical,
        }
    }

    pub fn with_sheet(path: impl Into<PathBuf>) -> Self {
        Self {
            source: FactSource::JsonFile(path.into()),
        }
    }

    /// Read the configuration from [`FACTS_PATH_ENV`]. Unset or blank
    /// selects the canonical tables.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(FACTS_PATH_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(path) if !path.trim().is_empty() => Self::with_sheet(path.trim()),
            _ => Self::canonical(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.source {
            FactSource::Canonical => Ok(()),
            FactSource::JsonFile(path) => {
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::EmptyPath);
                }
                if !path.is_file() {
                    return Err(ConfigError::MissingFile(path.clone()));
                }
                Ok(())
            }
        }
    }

    /// Validate, then load the configured facts.
    pub fn open(&self) -> Result<InMemoryFactStore, StoreError> {
        self.validate()?;
        let sheet = match &self.source {
            FactSource::Canonical => FactSheet::canonical(),
            FactSource::JsonFile(path) => FactSheet::from_path(path)?,
        };
        Ok(InMemoryFactStore::from_sheet(sheet))
    }
}
