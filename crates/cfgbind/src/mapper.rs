// crates/cfgbind/src/mapper.rs
// ============================================================================
// Module: Value Mappers
// Description: Lenient conversions from generic values to typed values.
// Purpose: Back every typed accessor with one explicit conversion table.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`Mapper`] turns a generic [`Value`] into a concrete type. Mapping is
//! lenient in the way hand-written config files need: numbers accept numeric
//! strings, strings accept numbers and booleans, and booleans accept `1` and
//! `"true"`. `map` returns `None` on failure; `map_strict` reports a
//! [`ConfigError::Mapping`] naming the value and target type.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Number;
use serde_json::Value;

use crate::config::Config;
use crate::error::ConfigError;

// ============================================================================
// SECTION: Mapper Trait
// ============================================================================

/// Converts generic values into `T`.
pub trait Mapper<T> {
    /// Type name used in mapping errors.
    fn target(&self) -> &str;

    /// Converts a non-null value, returning `None` when it does not fit.
    fn convert(&self, value: &Value) -> Option<T>;

    /// Maps a value; null and unconvertible values yield `None`.
    fn map(&self, value: &Value) -> Option<T> {
        if value.is_null() { None } else { self.convert(value) }
    }

    /// Maps a value, failing when it cannot be converted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mapping`] when the value is null or does not fit.
    fn map_strict(&self, value: &Value) -> Result<T, ConfigError> {
        self.map(value).ok_or_else(|| ConfigError::cannot_map(value, self.target()))
    }
}

// ============================================================================
// SECTION: Built-in Mappers
// ============================================================================

/// Maps scalars to their string form.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringMapper;

impl Mapper<String> for StringMapper {
    fn target(&self) -> &str {
        "String"
    }

    fn convert(&self, value: &Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Maps booleans, `"true"` strings, and numeric flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolMapper;

impl Mapper<bool> for BoolMapper {
    fn target(&self) -> &str {
        "bool"
    }

    fn convert(&self, value: &Value) -> Option<bool> {
        match value {
            Value::Bool(flag) => Some(*flag),
            Value::String(text) => Some(text.eq_ignore_ascii_case("true")),
            Value::Number(number) => i64::from_number(number).map(|n| n == 1),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Maps single-character strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharMapper;

impl Mapper<char> for CharMapper {
    fn target(&self) -> &str {
        "char"
    }

    fn convert(&self, value: &Value) -> Option<char> {
        let text = value.as_str()?;
        let mut chars = text.chars();
        let first = chars.next()?;
        chars.next().is_none().then_some(first)
    }
}

/// Maps objects to nested [`Config`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigMapper;

impl Mapper<Config> for ConfigMapper {
    fn target(&self) -> &str {
        "Config"
    }

    fn convert(&self, value: &Value) -> Option<Config> {
        value.as_object().map(|map| Config::from_map(map.clone()))
    }
}

/// Maps numbers and numeric strings to a primitive number type.
#[derive(Debug, Clone, Copy)]
pub struct NumberMapper<N> {
    /// Marker for the target number type.
    marker: PhantomData<fn() -> N>,
}

impl<N> NumberMapper<N> {
    /// Creates a number mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<N> Default for NumberMapper<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: MappedNumber> Mapper<N> for NumberMapper<N> {
    fn target(&self) -> &str {
        N::NAME
    }

    fn convert(&self, value: &Value) -> Option<N> {
        match value {
            Value::Number(number) => N::from_number(number),
            Value::String(text) => text.trim().parse().ok(),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Maps any deserializable type through serde.
pub struct SerdeMapper<T> {
    /// Marker for the target type.
    marker: PhantomData<fn() -> T>,
}

impl<T> SerdeMapper<T> {
    /// Creates a serde-backed mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for SerdeMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Mapper<T> for SerdeMapper<T> {
    fn target(&self) -> &str {
        std::any::type_name::<T>()
    }

    fn convert(&self, value: &Value) -> Option<T> {
        serde_json::from_value(value.clone()).ok()
    }
}

// ============================================================================
// SECTION: Number Conversions
// ============================================================================

/// Primitive numbers reachable through [`NumberMapper`].
pub trait MappedNumber: FromStr + Sized {
    /// Type name used in mapping errors.
    const NAME: &'static str;

    /// Narrows a JSON number to this type.
    fn from_number(number: &Number) -> Option<Self>;
}

/// Implements [`MappedNumber`] with primitive-cast narrowing.
macro_rules! mapped_number {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl MappedNumber for $ty {
                const NAME: &'static str = $name;

                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_precision_loss,
                    clippy::cast_sign_loss,
                    clippy::unnecessary_cast,
                    reason = "Numeric config values narrow like primitive casts."
                )]
                fn from_number(number: &Number) -> Option<Self> {
                    if let Some(value) = number.as_i64() {
                        return Some(value as $ty);
                    }
                    if let Some(value) = number.as_u64() {
                        return Some(value as $ty);
                    }
                    number.as_f64().map(|value| value as $ty)
                }
            }
        )*
    };
}

mapped_number! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    f32 => "f32",
    f64 => "f64",
}

// ============================================================================
// SECTION: Tests
// ============================================================================
