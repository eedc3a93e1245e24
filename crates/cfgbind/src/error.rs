// crates/cfgbind/src/error.rs
// ============================================================================
// Module: Config Errors
// Description: Error taxonomy shared by loaders, accessors, and file configs.
// Purpose: Keep parse, mapping, and lookup failures distinguishable.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every fallible operation in `cfgbind` returns [`ConfigError`]. Parse
//! failures (malformed input) and mapping failures (well-formed input that
//! cannot populate the requested type) are separate variants so callers can
//! tell a broken file from a schema mismatch.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Result alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Config loading and access errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading or writing a config source.
    #[error("config io error: {0}")]
    Io(String),
    /// Input is not well-formed for the selected format.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Well-formed input cannot populate the requested type.
    #[error("config mapping error: {0}")]
    Mapping(String),
    /// A required key or path is absent or null.
    #[error("config key missing: {0}")]
    MissingKey(String),
    /// A value cannot be written in the requested format.
    #[error("config serialize error: {0}")]
    Serialize(String),
    /// Invalid options, limits, or paths.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// Unknown format or disabled capability.
    #[error("unsupported config operation: {0}")]
    Unsupported(String),
}

impl ConfigError {
    /// Builds the mapping error used when a value cannot be converted.
    pub(crate) fn cannot_map(value: &impl std::fmt::Display, target: &str) -> Self {
        Self::Mapping(format!("cannot map {value} to {target}"))
    }

    /// Returns true when the error reports a missing key or path.
    #[must_use]
    pub const fn is_missing_key(&self) -> bool {
        matches!(self, Self::MissingKey(_))
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
