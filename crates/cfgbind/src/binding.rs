// crates/cfgbind/src/binding.rs
// ============================================================================
// Module: Constructor Binding
// Description: Builds values through explicit named constructor parameters.
// Purpose: Support types whose construction is not a plain field-by-field
//          deserialize (validated newtypes, immutable records).
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Types implementing [`Construct`] declare their constructor parameters by
//! name. Binding reads the parsed object, collects the declared parameters,
//! rejects absent required ones, and hands the collected [`Arguments`] to
//! [`Construct::construct`]. Undeclared keys are ignored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;

use crate::config::ConfigRead;
use crate::error::ConfigError;

// ============================================================================
// SECTION: Parameters
// ============================================================================

/// A named constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Key the parameter is read from.
    pub name: &'static str,
    /// Whether binding fails when the key is absent or null.
    pub required: bool,
}

impl Param {
    /// Declares a required parameter.
    #[must_use]
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    /// Declares an optional parameter.
    #[must_use]
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// Types built from named constructor parameters.
pub trait Construct: Sized {
    /// Declared parameters in constructor order.
    const PARAMS: &'static [Param];

    /// Builds the value from collected arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an argument cannot be converted or the
    /// combination is rejected.
    fn construct(args: Arguments) -> Result<Self, ConfigError>;
}

// ============================================================================
// SECTION: Arguments
// ============================================================================

/// Arguments collected for a [`Construct`] call.
#[derive(Debug, Default)]
pub struct Arguments {
    /// Declared parameters that were present in the source.
    values: Map<String, Value>,
}

impl Arguments {
    /// Takes a parameter and converts it into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mapping`] when the parameter is absent or does
    /// not convert.
    pub fn take<T: DeserializeOwned>(&mut self, name: &str) -> Result<T, ConfigError> {
        let value = self.values.shift_remove(name).ok_or_else(|| missing_param(name))?;
        convert(name, value)
    }

    /// Takes an optional parameter, returning `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mapping`] when a present value does not convert.
    pub fn take_optional<T: DeserializeOwned>(&mut self, name: &str) -> Result<Option<T>, ConfigError> {
        self.values.shift_remove(name).map(|value| convert(name, value)).transpose()
    }

    /// Takes a parameter, falling back to `T::default()` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mapping`] when a present value does not convert.
    pub fn take_or_default<T: DeserializeOwned + Default>(&mut self, name: &str) -> Result<T, ConfigError> {
        Ok(self.take_optional(name)?.unwrap_or_default())
    }
}

/// Converts one argument value.
fn convert<T: DeserializeOwned>(name: &str, value: Value) -> Result<T, ConfigError> {
    serde_json::from_value(value)
        .map_err(|err| ConfigError::Mapping(format!("constructor parameter {name}: {err}")))
}

/// Error for an absent required parameter.
fn missing_param(name: &str) -> ConfigError {
    ConfigError::Mapping(format!("missing constructor parameter {name}"))
}

// ============================================================================
// SECTION: Binding
// ============================================================================

/// Binds `T` from a parsed config through its constructor.
///
/// # Errors
///
/// Returns [`ConfigError::Mapping`] when a required parameter is absent or
/// null, or when [`Construct::construct`] rejects the arguments.
pub fn bind<T: Construct>(source: &impl ConfigRead) -> Result<T, ConfigError> {
    let mut values = Map::with_capacity(T::PARAMS.len());
    for param in T::PARAMS {
        match source.find_raw(param.name) {
            Some(value) => {
                values.insert(param.name.to_string(), value.clone());
            }
            None if param.required => return Err(missing_param(param.name)),
            None => {}
        }
    }
    T::construct(Arguments {
        values,
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
