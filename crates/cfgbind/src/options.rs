// crates/cfgbind/src/options.rs
// ============================================================================
// Module: Loader Options
// Description: Tunables and hard limits applied by providers and file configs.
// Purpose: Bound input sizes and path lengths before any parsing happens.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`LoaderOptions`] controls how a provider reads and writes documents. The
//! options are themselves deserializable so host applications can embed them
//! in their own configuration. Reader and file sources larger than
//! `max_input_bytes` are rejected before parsing; in-memory text is not capped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default maximum input size in bytes.
pub(crate) const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;
/// Largest accepted value for `max_input_bytes`.
pub(crate) const MAX_INPUT_BYTES_CEILING: usize = 64 * 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Options applied by a [`crate::ConfigProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderOptions {
    /// Maximum size in bytes accepted from readers and files.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Enable constructor binding when the capability is available.
    #[serde(default = "default_true")]
    pub constructor_binding: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
            pretty: true,
            constructor_binding: true,
        }
    }
}

impl LoaderOptions {
    /// Validates option ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a limit is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_input_bytes must be greater than zero".to_string(),
            ));
        }
        if self.max_input_bytes > MAX_INPUT_BYTES_CEILING {
            return Err(ConfigError::Invalid(format!(
                "max_input_bytes must be at most {MAX_INPUT_BYTES_CEILING}"
            )));
        }
        Ok(())
    }
}

/// Default for `max_input_bytes`.
const fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

/// Serde default helper for flags that start enabled.
const fn default_true() -> bool {
    true
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates a config path against length limits.
pub(crate) fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.trim().is_empty() {
        return Err(ConfigError::Invalid("config path must be non-empty".to_string()));
    }
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Reads at most `max_bytes` from `reader`, failing if more is available.
pub(crate) fn read_limited(reader: impl Read, max_bytes: usize) -> Result<Vec<u8>, ConfigError> {
    let limit = u64::try_from(max_bytes.saturating_add(1))
        .map_err(|_| ConfigError::Invalid("config size limit exceeds u64".to_string()))?;
    let mut buf = Vec::new();
    reader.take(limit).read_to_end(&mut buf)?;
    if buf.len() > max_bytes {
        return Err(ConfigError::Invalid("config input exceeds size limit".to_string()));
    }
    Ok(buf)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
