// crates/cfgbind/src/path.rs
// ============================================================================
// Module: Dotted Paths
// Description: Typed access to nested entries through `a.b.c` paths.
// Purpose: Avoid manual object walking for deeply nested settings.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`ConfigPath`] splits its path at the last `.`: everything before it
//! names nested objects, the final segment names the entry. When an
//! intermediate object is missing the path has no parent; strict accessors
//! then fail with [`ConfigError::MissingKey`] carrying the full path, while
//! `as_optional_*` accessors return `None`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::config::ConfigRead;
use crate::config::ConfigRef;
use crate::error::ConfigError;

// ============================================================================
// SECTION: Config Path
// ============================================================================

/// Dotted-path view over a config root.
#[derive(Debug, Clone, Copy)]
pub struct ConfigPath<'a> {
    /// Root the path is resolved against.
    root: ConfigRef<'a>,
    /// Full dotted path.
    path: &'a str,
}

impl<'a> ConfigPath<'a> {
    /// Creates a path view.
    #[must_use]
    pub const fn new(root: ConfigRef<'a>, path: &'a str) -> Self {
        Self {
            root,
            path,
        }
    }

    /// Returns the full dotted path.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.path
    }

    /// Resolves the parent object and the final key.
    fn parent(&self) -> Option<(ConfigRef<'a>, &'a str)> {
        let (parents, name) = match self.path.rsplit_once('.') {
            Some((parents, name)) => (Some(parents), name),
            None => (None, self.path),
        };
        let mut step = self.root;
        if let Some(parents) = parents {
            for segment in parents.split('.') {
                step = step.child(segment)?;
            }
        }
        Some((step, name))
    }

    /// Runs a strict lookup, reporting missing keys against the full path.
    fn strict<T>(
        &self,
        lookup: impl FnOnce(ConfigRef<'a>, &'a str) -> Result<T, ConfigError>,
    ) -> Result<T, ConfigError> {
        let (parent, name) = self.parent().ok_or_else(|| self.missing())?;
        lookup(parent, name).map_err(|err| if err.is_missing_key() { self.missing() } else { err })
    }

    /// Runs an optional lookup; an absent parent yields `None`.
    fn optional<T>(&self, lookup: impl FnOnce(ConfigRef<'a>, &'a str) -> Option<T>) -> Option<T> {
        self.parent().and_then(|(parent, name)| lookup(parent, name))
    }

    /// Missing-key error naming the full path.
    fn missing(&self) -> ConfigError {
        ConfigError::MissingKey(self.path.to_string())
    }

    // ------------------------------------------------------------------------
    // Presence and optional access
    // ------------------------------------------------------------------------

    /// Returns true when the final key exists under an existing parent.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.optional(|parent, name| parent.contains(name).then_some(())).is_some()
    }

    /// Returns the entry as a string, if present and convertible.
    #[must_use]
    pub fn as_optional_string(&self) -> Option<String> {
        self.optional(|parent, name| parent.find_string(name))
    }

    /// Returns the entry as a bool, if present and convertible.
    #[must_use]
    pub fn as_optional_bool(&self) -> Option<bool> {
        self.optional(|parent, name| parent.find_bool(name))
    }

    /// Returns the entry as an `i32`, if present and convertible.
    #[must_use]
    pub fn as_optional_i32(&self) -> Option<i32> {
        self.optional(|parent, name| parent.find_i32(name))
    }

    /// Returns the entry as an `i64`, if present and convertible.
    #[must_use]
    pub fn as_optional_i64(&self) -> Option<i64> {
        self.optional(|parent, name| parent.find_i64(name))
    }

    /// Returns the entry as an `f64`, if present and convertible.
    #[must_use]
    pub fn as_optional_f64(&self) -> Option<f64> {
        self.optional(|parent, name| parent.find_f64(name))
    }

    /// Deserializes the entry into `T`, if present and compatible.
    #[must_use]
    pub fn as_optional<T: DeserializeOwned>(&self) -> Option<T> {
        self.optional(|parent, name| parent.find_as(name))
    }

    // ------------------------------------------------------------------------
    // Strict access
    // ------------------------------------------------------------------------

    /// Returns the raw entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when the path does not resolve.
    pub fn as_raw(&self) -> Result<Value, ConfigError> {
        self.strict(|parent, name| parent.get_raw(name).cloned())
    }

    /// Returns the raw entry or `default` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when the parent does not resolve.
    pub fn as_raw_or(&self, default: Value) -> Result<Value, ConfigError> {
        self.strict(|parent, name| Ok(parent.get_raw_or(name, default)))
    }

    /// Returns the entry as a string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when the path does not resolve and
    /// [`ConfigError::Mapping`] when the entry does not convert.
    pub fn as_string(&self) -> Result<String, ConfigError> {
        self.strict(|parent, name| parent.get_string(name))
    }

    /// Returns the entry as a string or `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when the parent does not resolve.
    pub fn as_string_or(&self, default: &str) -> Result<String, ConfigError> {
        self.strict(|parent, name| Ok(parent.get_string_or(name, default)))
    }

    /// Returns the entry as a bool.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string`].
    pub fn as_bool(&self) -> Result<bool, ConfigError> {
        self.strict(|parent, name| parent.get_bool(name))
    }

    /// Returns the entry as a bool or `default` when absent.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string_or`].
    pub fn as_bool_or(&self, default: bool) -> Result<bool, ConfigError> {
        self.strict(|parent, name| Ok(parent.get_bool_or(name, default)))
    }

    /// Returns the entry as an `i32`.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string`].
    pub fn as_i32(&self) -> Result<i32, ConfigError> {
        self.strict(|parent, name| parent.get_i32(name))
    }

    /// Returns the entry as an `i32` or `default` when absent.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string_or`].
    pub fn as_i32_or(&self, default: i32) -> Result<i32, ConfigError> {
        self.strict(|parent, name| Ok(parent.get_i32_or(name, default)))
    }

    /// Returns the entry as an `i64`.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string`].
    pub fn as_i64(&self) -> Result<i64, ConfigError> {
        self.strict(|parent, name| parent.get_i64(name))
    }

    /// Returns the entry as an `i64` or `default` when absent.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string_or`].
    pub fn as_i64_or(&self, default: i64) -> Result<i64, ConfigError> {
        self.strict(|parent, name| Ok(parent.get_i64_or(name, default)))
    }

    /// Returns the entry as an `f64`.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string`].
    pub fn as_f64(&self) -> Result<f64, ConfigError> {
        self.strict(|parent, name| parent.get_f64(name))
    }

    /// Returns the entry as an `f64` or `default` when absent.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string_or`].
    pub fn as_f64_or(&self, default: f64) -> Result<f64, ConfigError> {
        self.strict(|parent, name| Ok(parent.get_f64_or(name, default)))
    }

    /// Deserializes the entry into `T`.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string`].
    pub fn as_type<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        self.strict(|parent, name| parent.get_as(name))
    }

    /// Returns an owned copy of the nested object at this path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when the path does not resolve to
    /// an object.
    pub fn as_object(&self) -> Result<Config, ConfigError> {
        self.strict(|parent, name| parent.get_object(name))
    }

    // ------------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------------

    /// Returns the list at this path as strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when the parent does not resolve
    /// and [`ConfigError::Mapping`] when an element does not convert.
    pub fn as_string_list(&self) -> Result<Vec<String>, ConfigError> {
        self.strict(|parent, name| parent.get_string_list(name))
    }

    /// Returns the list at this path as nested configs.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string_list`].
    pub fn as_object_list(&self) -> Result<Vec<Config>, ConfigError> {
        self.strict(|parent, name| parent.get_object_list(name))
    }

    /// Returns the list at this path as `i8` values.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string_list`].
    pub fn as_i8_list(&self) -> Result<Vec<i8>, ConfigError> {
        self.strict(|parent, name| parent.get_i8_list(name))
    }

    /// Returns the list at this path as `i16` values.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string_list`].
    pub fn as_i16_list(&self) -> Result<Vec<i16>, ConfigError> {
        self.strict(|parent, name| parent.get_i16_list(name))
    }

    /// Returns the list at this path as `i32` values.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string_list`].
    pub fn as_i32_list(&self) -> Result<Vec<i32>, ConfigError> {
        self.strict(|parent, name| parent.get_i32_list(name))
    }

    /// Returns the list at this path as `i64` values.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string_list`].
    pub fn as_i64_list(&self) -> Result<Vec<i64>, ConfigError> {
        self.strict(|parent, name| parent.get_i64_list(name))
    }

    /// Returns the list at this path as `f32` values.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string_list`].
    pub fn as_f32_list(&self) -> Result<Vec<f32>, ConfigError> {
        self.strict(|parent, name| parent.get_f32_list(name))
    }

    /// Returns the list at this path as `f64` values.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string_list`].
    pub fn as_f64_list(&self) -> Result<Vec<f64>, ConfigError> {
        self.strict(|parent, name| parent.get_f64_list(name))
    }

    /// Returns the list at this path as bools.
    ///
    /// # Errors
    ///
    /// See [`ConfigPath::as_string_list`].
    pub fn as_bool_list(&self) -> Result<Vec<bool>, ConfigError> {
        self.strict(|parent, name| parent.get_bool_list(name))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use serde_json::json;

    use super::*;

    fn sample() -> Config {
        Config::try_from(json!({
            "server": {
                "http": {"port": "8080", "hosts": ["a", "b"]},
                "name": "edge"
            },
            "debug": 1
        }))
        .unwrap()
    }

    #[test]
    fn resolves_nested_entries() {
        let config = sample();
        assert_eq!(config.path("server.http.port").as_i32().unwrap(), 8080);
        assert_eq!(config.path("server.name").as_string().unwrap(), "edge");
        assert!(config.path("debug").as_bool().unwrap());
    }

    #[test]
    fn missing_parent_reports_full_path() {
        let config = sample();
        let err = config.path("server.grpc.port").as_i32().unwrap_err();
        assert_eq!(err, ConfigError::MissingKey("server.grpc.port".to_string()));
        assert!(config.path("server.grpc.port").as_i32_or(1).is_err());
    }

    #[test]
    fn missing_leaf_uses_default_or_reports_full_path() {
        let config = sample();
        let path = config.path("server.http.timeout");
        assert_eq!(path.as_i64_or(30).unwrap(), 30);
        assert_eq!(path.as_i64().unwrap_err(), ConfigError::MissingKey("server.http.timeout".to_string()));
    }

    #[test]
    fn presence_and_optional_access() {
        let config = sample();
        assert!(config.path("server.http.port").is_present());
        assert!(!config.path("server.http.tls").is_present());
        assert!(!config.path("nowhere.at.all").is_present());
        assert_eq!(config.path("nowhere.at.all").as_optional_string(), None);
        assert_eq!(config.path("server.http.port").as_optional_i64(), Some(8080));
    }

    #[test]
    fn list_and_object_access() {
        let config = sample();
        assert_eq!(config.path("server.http.hosts").as_string_list().unwrap(), vec!["a", "b"]);
        let http = config.path("server.http").as_object().unwrap();
        assert_eq!(http.len(), 2);
    }

    #[test]
    fn mapping_errors_pass_through() {
        let config = sample();
        let err = config.path("server.name").as_i32().unwrap_err();
        assert!(matches!(err, ConfigError::Mapping(_)));
    }
}
