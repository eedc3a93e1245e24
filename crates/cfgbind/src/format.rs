// crates/cfgbind/src/format.rs
// ============================================================================
// Module: Config Formats
// Description: Decoding and encoding for JSON, YAML, and TOML documents.
// Purpose: Normalize every format into one generic value tree.
// Dependencies: serde, serde_json, serde_yaml, toml
// ============================================================================

//! ## Overview
//! Each [`ConfigFormat`] decodes into a [`serde_json::Value`] tree. YAML and
//! TOML documents go through their native value types first and are then
//! converted key by key, so scalar keys such as `123` or `yes` always arrive
//! as strings and format-specific values (tags, datetimes) are flattened.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_json::Map;
use serde_json::Number;
use serde_json::Value;

use crate::error::ConfigError;

// ============================================================================
// SECTION: Format
// ============================================================================

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// JSON documents.
    Json,
    /// YAML documents.
    Yaml,
    /// TOML documents.
    Toml,
}

impl ConfigFormat {
    /// Resolves a format from a file extension (case-insensitive).
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Resolves a format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Unsupported`] when the extension is missing or
    /// unknown.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            ConfigError::Unsupported(format!("cannot get an extension of {}", path.display()))
        })?;
        Self::from_extension(ext).ok_or_else(|| {
            ConfigError::Unsupported(format!("no config format for {}", path.display()))
        })
    }

    /// Short lowercase name of the format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    /// Decodes a document into a generic value tree.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and
    /// [`ConfigError::Mapping`] for values with no generic representation.
    pub fn decode(self, input: &[u8]) -> Result<Value, ConfigError> {
        match self {
            Self::Json => {
                serde_json::from_slice(input).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            Self::Yaml => {
                let value: serde_yaml::Value = serde_yaml::from_slice(input)
                    .map_err(|err| ConfigError::Parse(err.to_string()))?;
                yaml_to_json(value)
            }
            Self::Toml => {
                let text = std::str::from_utf8(input)
                    .map_err(|_| ConfigError::Parse("toml input must be utf-8".to_string()))?;
                let table: toml::Table =
                    toml::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
                toml_table_to_json(table)
            }
        }
    }

    /// Encodes a serializable value in this format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] when the value cannot be written.
    pub fn encode<T: Serialize + ?Sized>(self, value: &T, pretty: bool) -> Result<Vec<u8>, ConfigError> {
        match self {
            Self::Json => {
                let encoded = if pretty {
                    serde_json::to_vec_pretty(value)
                } else {
                    serde_json::to_vec(value)
                };
                encoded.map_err(|err| ConfigError::Serialize(err.to_string()))
            }
            Self::Yaml => serde_yaml::to_string(value)
                .map(String::into_bytes)
                .map_err(|err| ConfigError::Serialize(err.to_string())),
            Self::Toml => toml::to_string_pretty(value)
                .map(String::into_bytes)
                .map_err(|err| ConfigError::Serialize(err.to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// SECTION: YAML Conversion
// ============================================================================

/// Converts a YAML value into a JSON value.
fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, ConfigError> {
    match value {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(flag) => Ok(Value::Bool(flag)),
        serde_yaml::Value::Number(number) => yaml_number(&number),
        serde_yaml::Value::String(text) => Ok(Value::String(text)),
        serde_yaml::Value::Sequence(items) => {
            items.into_iter().map(yaml_to_json).collect::<Result<Vec<_>, _>>().map(Value::Array)
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = yaml_key(&key)?;
                if map.contains_key(&key) {
                    return Err(ConfigError::Mapping(format!("duplicate yaml key {key}")));
                }
                map.insert(key, yaml_to_json(value)?);
            }
            Ok(Value::Object(map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

/// Converts a YAML number, rejecting non-finite floats.
fn yaml_number(number: &serde_yaml::Number) -> Result<Value, ConfigError> {
    if let Some(value) = number.as_i64() {
        return Ok(Value::from(value));
    }
    if let Some(value) = number.as_u64() {
        return Ok(Value::from(value));
    }
    number
        .as_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| ConfigError::cannot_map(number, "finite number"))
}

/// Stringifies a YAML mapping key.
fn yaml_key(key: &serde_yaml::Value) -> Result<String, ConfigError> {
    match key {
        serde_yaml::Value::String(text) => Ok(text.clone()),
        serde_yaml::Value::Number(number) => Ok(number.to_string()),
        serde_yaml::Value::Bool(flag) => Ok(flag.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(&tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => {
            Err(ConfigError::Mapping("yaml mapping keys must be scalars".to_string()))
        }
    }
}

// ============================================================================
// SECTION: TOML Conversion
// ============================================================================

/// Converts a TOML table into a JSON object.
fn toml_table_to_json(table: toml::Table) -> Result<Value, ConfigError> {
    table
        .into_iter()
        .map(|(key, value)| toml_to_json(value).map(|value| (key, value)))
        .collect::<Result<Map<_, _>, _>>()
        .map(Value::Object)
}

/// Converts a TOML value into a JSON value, rejecting non-finite floats.
fn toml_to_json(value: toml::Value) -> Result<Value, ConfigError> {
    match value {
        toml::Value::String(text) => Ok(Value::String(text)),
        toml::Value::Integer(number) => Ok(Value::from(number)),
        toml::Value::Float(number) => Number::from_f64(number)
            .map(Value::Number)
            .ok_or_else(|| ConfigError::cannot_map(&number, "finite number")),
        toml::Value::Boolean(flag) => Ok(Value::Bool(flag)),
        toml::Value::Datetime(datetime) => Ok(Value::String(datetime.to_string())),
        toml::Value::Array(items) => {
            items.into_iter().map(toml_to_json).collect::<Result<Vec<_>, _>>().map(Value::Array)
        }
        toml::Value::Table(table) => toml_table_to_json(table),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
