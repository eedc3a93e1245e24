// crates/cfgbind/src/provider.rs
// ============================================================================
// Module: Config Provider
// Description: Format-bound loader that parses, binds, and writes configs.
// Purpose: Single entry point for turning text into typed values and back.
// Dependencies: serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! A [`ConfigProvider`] pairs a [`ConfigFormat`] with [`LoaderOptions`].
//! Loading is two explicit steps: the input is decoded into a generic value
//! tree (malformed input fails with [`ConfigError::Parse`]), then the tree is
//! bound to the requested type (shape mismatches fail with
//! [`ConfigError::Mapping`]). Nothing is returned partially built.
//!
//! Shared providers for each format are built lazily and live for the whole
//! process; [`ProviderBuilder`] creates providers with custom options.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::fs::File;
use std::io;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;
use tracing::debug;

use crate::binding;
use crate::binding::Construct;
use crate::config::Config;
use crate::error::ConfigError;
use crate::format::ConfigFormat;
use crate::interop;
use crate::options::LoaderOptions;
use crate::options::read_limited;
use crate::options::validate_path;

// ============================================================================
// SECTION: Shared Instances
// ============================================================================

/// Shared JSON provider.
static JSON: OnceLock<ConfigProvider> = OnceLock::new();
/// Shared YAML provider.
static YAML: OnceLock<ConfigProvider> = OnceLock::new();
/// Shared TOML provider.
static TOML: OnceLock<ConfigProvider> = OnceLock::new();

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for [`ConfigProvider`] instances with custom options.
#[derive(Debug, Clone)]
pub struct ProviderBuilder {
    /// Document format.
    format: ConfigFormat,
    /// Loader options.
    options: LoaderOptions,
    /// Whether constructor binding has been registered.
    constructor_binding: bool,
}

impl ProviderBuilder {
    /// Starts a builder with default options.
    #[must_use]
    pub fn new(format: ConfigFormat) -> Self {
        Self {
            format,
            options: LoaderOptions::default(),
            constructor_binding: false,
        }
    }

    /// Replaces all options.
    #[must_use]
    pub fn options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the maximum size accepted from readers and files.
    #[must_use]
    pub const fn max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.options.max_input_bytes = max_input_bytes;
        self
    }

    /// Enables or disables pretty JSON output.
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.options.pretty = pretty;
        self
    }

    /// Registers constructor binding; called by [`interop::try_enable`].
    pub(crate) const fn enable_constructor_binding(&mut self) {
        self.constructor_binding = true;
    }

    /// Validates options and builds the provider.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when options are out of range.
    pub fn build(mut self) -> Result<ConfigProvider, ConfigError> {
        self.options.validate()?;
        if self.options.constructor_binding {
            interop::try_enable(&mut self);
        } else {
            self.constructor_binding = false;
        }
        Ok(self.finish())
    }

    /// Builds the provider without validation.
    fn finish(self) -> ConfigProvider {
        ConfigProvider {
            format: self.format,
            options: self.options,
            constructor_binding: self.constructor_binding,
        }
    }
}

// ============================================================================
// SECTION: Provider
// ============================================================================

/// Parses, binds, and writes documents of one format.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    /// Document format.
    format: ConfigFormat,
    /// Loader options.
    options: LoaderOptions,
    /// Whether `load_constructed` is permitted.
    constructor_binding: bool,
}

impl ConfigProvider {
    /// Creates a provider with default options.
    #[must_use]
    pub fn new(format: ConfigFormat) -> Self {
        let mut builder = ProviderBuilder::new(format);
        interop::try_enable(&mut builder);
        builder.finish()
    }

    /// Starts a builder for custom options.
    #[must_use]
    pub fn builder(format: ConfigFormat) -> ProviderBuilder {
        ProviderBuilder::new(format)
    }

    /// Shared JSON provider.
    pub fn json() -> &'static Self {
        JSON.get_or_init(|| Self::new(ConfigFormat::Json))
    }

    /// Shared YAML provider.
    pub fn yaml() -> &'static Self {
        YAML.get_or_init(|| Self::new(ConfigFormat::Yaml))
    }

    /// Shared TOML provider.
    pub fn toml() -> &'static Self {
        TOML.get_or_init(|| Self::new(ConfigFormat::Toml))
    }

    /// Shared provider for `format`.
    pub fn shared(format: ConfigFormat) -> &'static Self {
        match format {
            ConfigFormat::Json => Self::json(),
            ConfigFormat::Yaml => Self::yaml(),
            ConfigFormat::Toml => Self::toml(),
        }
    }

    /// Shared provider selected by the extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Unsupported`] for unknown extensions.
    pub fn for_path(path: &Path) -> Result<&'static Self, ConfigError> {
        ConfigFormat::from_path(path).map(Self::shared)
    }

    /// Returns the document format.
    #[must_use]
    pub const fn format(&self) -> ConfigFormat {
        self.format
    }

    /// Returns the loader options.
    #[must_use]
    pub const fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Returns whether constructor binding is enabled on this provider.
    #[must_use]
    pub const fn constructor_binding_enabled(&self) -> bool {
        self.constructor_binding
    }

    // ------------------------------------------------------------------------
    // Typed loading
    // ------------------------------------------------------------------------

    /// Loads `T` from text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and
    /// [`ConfigError::Mapping`] when `T` cannot be built from it.
    pub fn load<T: DeserializeOwned>(&self, input: &str) -> Result<T, ConfigError> {
        self.load_bytes(input.as_bytes())
    }

    /// Loads `T` from raw bytes.
    ///
    /// # Errors
    ///
    /// See [`ConfigProvider::load`].
    pub fn load_bytes<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, ConfigError> {
        bind_value(self.decode(input)?)
    }

    /// Loads `T` from a reader, honoring the size limit.
    ///
    /// # Errors
    ///
    /// See [`ConfigProvider::load`]; read failures return [`ConfigError::Io`].
    pub fn load_reader<T: DeserializeOwned>(&self, reader: impl Read) -> Result<T, ConfigError> {
        let bytes = read_limited(reader, self.options.max_input_bytes)?;
        self.load_bytes(&bytes)
    }

    /// Loads `T` from a file.
    ///
    /// # Errors
    ///
    /// See [`ConfigProvider::load_reader`].
    pub fn load_path<T: DeserializeOwned>(&self, path: &Path) -> Result<T, ConfigError> {
        let bytes = self.read_path(path)?;
        self.load_bytes(&bytes)
    }

    /// Binds an in-memory value into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mapping`] when `T` cannot be built.
    #[allow(clippy::unused_self, reason = "Binding is format-independent but lives on the provider API.")]
    pub fn load_value<T: DeserializeOwned>(&self, value: Value) -> Result<T, ConfigError> {
        bind_value(value)
    }

    /// Loads `T` through its [`Construct`] implementation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Unsupported`] when constructor binding is not
    /// enabled, [`ConfigError::Parse`] for malformed input, and
    /// [`ConfigError::Mapping`] when a required parameter is missing.
    pub fn load_constructed<T: Construct>(&self, input: &str) -> Result<T, ConfigError> {
        if !self.constructor_binding {
            return Err(ConfigError::Unsupported("constructor binding is not enabled".to_string()));
        }
        let config = self.parse(input)?;
        binding::bind(&config)
    }

    // ------------------------------------------------------------------------
    // Generic parsing
    // ------------------------------------------------------------------------

    /// Parses text into a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and
    /// [`ConfigError::Mapping`] when the root is not an object.
    pub fn parse(&self, input: &str) -> Result<Config, ConfigError> {
        self.parse_bytes(input.as_bytes())
    }

    /// Parses raw bytes into a [`Config`].
    ///
    /// # Errors
    ///
    /// See [`ConfigProvider::parse`].
    pub fn parse_bytes(&self, input: &[u8]) -> Result<Config, ConfigError> {
        self.convert(self.decode(input)?)
    }

    /// Parses a reader into a [`Config`], honoring the size limit.
    ///
    /// # Errors
    ///
    /// See [`ConfigProvider::parse`]; read failures return [`ConfigError::Io`].
    pub fn parse_reader(&self, reader: impl Read) -> Result<Config, ConfigError> {
        let bytes = read_limited(reader, self.options.max_input_bytes)?;
        self.parse_bytes(&bytes)
    }

    /// Parses a file into a [`Config`].
    ///
    /// # Errors
    ///
    /// See [`ConfigProvider::parse_reader`].
    pub fn parse_path(&self, path: &Path) -> Result<Config, ConfigError> {
        let bytes = self.read_path(path)?;
        self.parse_bytes(&bytes)
    }

    /// Returns an empty config.
    #[must_use]
    #[allow(clippy::unused_self, reason = "Mirrors the provider-scoped parse entry points.")]
    pub fn new_object(&self) -> Config {
        Config::new()
    }

    /// Converts a generic value into a [`Config`]; null becomes empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mapping`] when the value is not an object.
    #[allow(clippy::unused_self, reason = "Mirrors the provider-scoped parse entry points.")]
    pub fn convert(&self, value: Value) -> Result<Config, ConfigError> {
        object_root(value).map(Config::from_map)
    }

    // ------------------------------------------------------------------------
    // Writing
    // ------------------------------------------------------------------------

    /// Encodes `value` as bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] when the value cannot be written.
    pub fn save_to_bytes<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, ConfigError> {
        let bytes = self.format.encode(value, self.options.pretty)?;
        debug!(format = %self.format, bytes = bytes.len(), "encoded config output");
        Ok(bytes)
    }

    /// Encodes `value` as text.
    ///
    /// # Errors
    ///
    /// See [`ConfigProvider::save_to_bytes`].
    pub fn save_to_string<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, ConfigError> {
        String::from_utf8(self.save_to_bytes(value)?)
            .map_err(|err| ConfigError::Serialize(err.to_string()))
    }

    /// Writes `value` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] or [`ConfigError::Io`].
    pub fn save_writer<T: Serialize + ?Sized>(
        &self,
        mut writer: impl Write,
        value: &T,
    ) -> Result<(), ConfigError> {
        let bytes = self.save_to_bytes(value)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes `value` to the file at `path`, replacing it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`], [`ConfigError::Invalid`] for
    /// rejected paths, or [`ConfigError::Io`].
    pub fn save_path<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<(), ConfigError> {
        validate_path(path)?;
        let bytes = self.save_to_bytes(value)?;
        fs::write(path, bytes).map_err(|err| io_error(path, &err))
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    /// Decodes in-memory input; size limits apply to reader and file sources.
    fn decode(&self, input: &[u8]) -> Result<Value, ConfigError> {
        let value = self.format.decode(input)?;
        debug!(format = %self.format, bytes = input.len(), "decoded config input");
        Ok(value)
    }

    /// Reads a file after validating its path, honoring the size limit.
    pub(crate) fn read_path(&self, path: &Path) -> Result<Vec<u8>, ConfigError> {
        validate_path(path)?;
        let file = File::open(path).map_err(|err| io_error(path, &err))?;
        read_limited(file, self.options.max_input_bytes)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Binds a decoded object into `T` by field name.
fn bind_value<T: DeserializeOwned>(value: Value) -> Result<T, ConfigError> {
    let map = object_root(value)?;
    serde_json::from_value(Value::Object(map)).map_err(|err| ConfigError::Mapping(err.to_string()))
}

/// Unwraps an object root; null is an empty object.
fn object_root(value: Value) -> Result<Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(ConfigError::Mapping(format!(
            "config root must be an object, found {}",
            value_kind(&other)
        ))),
    }
}

/// Attaches a path to an I/O error.
pub(crate) fn io_error(path: &Path, err: &io::Error) -> ConfigError {
    ConfigError::Io(format!("{}: {err}", path.display()))
}

/// Short label for a value's JSON type.
const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
