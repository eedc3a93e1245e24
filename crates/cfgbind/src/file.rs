// crates/cfgbind/src/file.rs
// ============================================================================
// Module: File Config
// Description: Config object bound to a file path and provider.
// Purpose: Load, edit, and persist a settings file in place.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! [`FileConfig`] owns a [`Config`] plus the absolute path it came from.
//! Opening never fails because the file is absent or unreadable as a
//! document: both cases start from an empty config, the latter with a
//! warning. I/O failures on an existing file and rejected paths propagate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde_json::Map;
use serde_json::Value;
use tracing::debug;
use tracing::warn;

use crate::config::Config;
use crate::config::ConfigRead;
use crate::config::ConfigWrite;
use crate::error::ConfigError;
use crate::options::validate_path;
use crate::provider::ConfigProvider;
use crate::provider::io_error;

// ============================================================================
// SECTION: File Config
// ============================================================================

/// A config loaded from, and saved to, one file.
#[derive(Debug, Clone)]
pub struct FileConfig {
    /// Absolute file path.
    path: PathBuf,
    /// Provider used for reading and writing.
    provider: ConfigProvider,
    /// Current contents.
    config: Config,
}

impl FileConfig {
    /// Opens `path` with the shared provider for its extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Unsupported`] for unknown extensions, plus the
    /// errors of [`FileConfig::open_with`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let provider = ConfigProvider::for_path(path)?.clone();
        Self::open_with(path, provider)
    }

    /// Opens `path` with an explicit provider and loads it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for rejected paths or oversized
    /// files, and [`ConfigError::Io`] when an existing file cannot be read.
    pub fn open_with(path: impl AsRef<Path>, provider: ConfigProvider) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        validate_path(path)?;
        let path = std::path::absolute(path).map_err(|err| io_error(path, &err))?;
        let mut file = Self {
            path,
            provider,
            config: Config::new(),
        };
        file.reload()?;
        Ok(file)
    }

    /// Replaces the contents with what is currently on disk.
    ///
    /// # Errors
    ///
    /// See [`FileConfig::open_with`].
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        if !self.exists()? {
            debug!(path = %self.path.display(), "config file absent, starting empty");
            self.config = Config::new();
            return Ok(());
        }
        let bytes = self.provider.read_path(&self.path)?;
        self.config = match self.provider.parse_bytes(&bytes) {
            Ok(config) => config,
            Err(err @ (ConfigError::Parse(_) | ConfigError::Mapping(_))) => {
                warn!(path = %self.path.display(), error = %err, "config file unreadable, starting empty");
                Config::new()
            }
            Err(err) => return Err(err),
        };
        debug!(path = %self.path.display(), entries = self.config.len(), "loaded config file");
        Ok(())
    }

    /// Writes the current contents, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Serialize`].
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| io_error(parent, &err))?;
        }
        self.provider.save_path(&self.path, &self.config)?;
        debug!(path = %self.path.display(), entries = self.config.len(), "saved config file");
        Ok(())
    }

    /// Seeds the file from `defaults` when it does not exist yet.
    ///
    /// Returns `true` when the defaults were adopted and written.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] or [`ConfigError::Mapping`] for bad
    /// defaults, plus the errors of [`FileConfig::save`].
    pub fn save_defaults(&mut self, defaults: &str) -> Result<bool, ConfigError> {
        if self.exists()? {
            return Ok(false);
        }
        self.config = self.provider.parse(defaults)?;
        self.save()?;
        Ok(true)
    }

    /// Returns the absolute file path.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Returns the provider.
    #[must_use]
    pub const fn provider(&self) -> &ConfigProvider {
        &self.provider
    }

    /// Returns the current contents.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current contents mutably.
    pub const fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Consumes the file binding, keeping the contents.
    #[must_use]
    pub fn into_config(self) -> Config {
        self.config
    }

    /// Checks whether the file is present.
    fn exists(&self) -> Result<bool, ConfigError> {
        self.path.try_exists().map_err(|err| io_error(&self.path, &err))
    }
}

impl ConfigRead for FileConfig {
    fn as_map(&self) -> &Map<String, Value> {
        self.config.as_map()
    }
}

impl ConfigWrite for FileConfig {
    fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        self.config.as_map_mut()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
