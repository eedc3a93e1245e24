// crates/cfgbind/src/config.rs
// ============================================================================
// Module: Config Object
// Description: Ordered key-value config tree with typed accessors.
// Purpose: Give callers strict, optional, and defaulted lookups over parsed input.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`Config`] owns an insertion-ordered map of string keys to generic
//! values. Read access lives on [`ConfigRead`] and mutation on
//! [`ConfigWrite`], so owned configs, borrowed views ([`ConfigRef`],
//! [`ConfigMut`]), and file-backed configs share one accessor surface.
//!
//! Every typed accessor comes in three shapes:
//! - `get_*` fails with [`ConfigError::MissingKey`] when the key is absent or
//!   null and with [`ConfigError::Mapping`] when the value does not convert.
//! - `find_*` returns `None` in both of those cases.
//! - `get_*_or` falls back to the supplied default in both of those cases.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;
use serde_json::map::Keys;
use serde_json::map::Values;

use crate::error::ConfigError;
use crate::mapper::BoolMapper;
use crate::mapper::CharMapper;
use crate::mapper::ConfigMapper;
use crate::mapper::Mapper;
use crate::mapper::NumberMapper;
use crate::mapper::SerdeMapper;
use crate::mapper::StringMapper;
use crate::path::ConfigPath;

// ============================================================================
// SECTION: Read Access
// ============================================================================

/// Read-only accessors shared by every config representation.
pub trait ConfigRead {
    /// Returns the underlying ordered map.
    fn as_map(&self) -> &Map<String, Value>;

    /// Iterates keys in insertion order.
    fn keys(&self) -> Keys<'_> {
        self.as_map().keys()
    }

    /// Iterates values in insertion order.
    fn values(&self) -> Values<'_> {
        self.as_map().values()
    }

    /// Returns true when the key is present (even if null).
    fn contains(&self, key: &str) -> bool {
        self.as_map().contains_key(key)
    }

    /// Returns true when there are no entries.
    fn is_empty(&self) -> bool {
        self.as_map().is_empty()
    }

    /// Returns the number of entries.
    fn len(&self) -> usize {
        self.as_map().len()
    }

    /// Returns an owned copy of this config.
    fn to_config(&self) -> Config {
        Config::from_map(self.as_map().clone())
    }

    /// Binds the whole object into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mapping`] when `T` cannot be built from the
    /// entries.
    fn as_type<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        serde_json::from_value(Value::Object(self.as_map().clone()))
            .map_err(|err| ConfigError::Mapping(err.to_string()))
    }

    /// Returns a view addressing nested entries with a dotted path.
    fn path<'a>(&'a self, path: &'a str) -> ConfigPath<'a> {
        ConfigPath::new(ConfigRef::new(self.as_map()), path)
    }

    // ------------------------------------------------------------------------
    // Raw values
    // ------------------------------------------------------------------------

    /// Returns the non-null value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when the key is absent or null.
    fn get_raw(&self, key: &str) -> Result<&Value, ConfigError> {
        self.find_raw(key).ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    /// Returns the value under `key` or `default` when absent or null.
    fn get_raw_or(&self, key: &str, default: Value) -> Value {
        self.find_raw(key).cloned().unwrap_or(default)
    }

    /// Returns the non-null value stored under `key`, if any.
    fn find_raw(&self, key: &str) -> Option<&Value> {
        self.as_map().get(key).filter(|value| !value.is_null())
    }

    // ------------------------------------------------------------------------
    // Mapper-driven access
    // ------------------------------------------------------------------------

    /// Maps the value under `key` with `mapper`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when absent or null and
    /// [`ConfigError::Mapping`] when the mapper rejects the value.
    fn get<T, M: Mapper<T>>(&self, key: &str, mapper: &M) -> Result<T, ConfigError> {
        mapper.map_strict(self.get_raw(key)?)
    }

    /// Maps the value under `key`, returning `None` when absent or rejected.
    fn find<T, M: Mapper<T>>(&self, key: &str, mapper: &M) -> Option<T> {
        self.find_raw(key).and_then(|value| mapper.map(value))
    }

    /// Maps the value under `key`, falling back to `default`.
    fn get_or<T, M: Mapper<T>>(&self, key: &str, mapper: &M, default: T) -> T {
        self.find(key, mapper).unwrap_or(default)
    }

    // ------------------------------------------------------------------------
    // Scalars
    // ------------------------------------------------------------------------

    /// Returns the value under `key` as a string.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get`].
    fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key, &StringMapper)
    }

    /// Returns the value under `key` as a string, if it converts.
    fn find_string(&self, key: &str) -> Option<String> {
        self.find(key, &StringMapper)
    }

    /// Returns the value under `key` as a string or `default`.
    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.find_string(key).unwrap_or_else(|| default.to_string())
    }

    /// Returns the value under `key` as a bool.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get`].
    fn get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        self.get(key, &BoolMapper)
    }

    /// Returns the value under `key` as a bool, if it converts.
    fn find_bool(&self, key: &str) -> Option<bool> {
        self.find(key, &BoolMapper)
    }

    /// Returns the value under `key` as a bool or `default`.
    fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_or(key, &BoolMapper, default)
    }

    /// Returns the value under `key` as an `i32`.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get`].
    fn get_i32(&self, key: &str) -> Result<i32, ConfigError> {
        self.get(key, &NumberMapper::<i32>::new())
    }

    /// Returns the value under `key` as an `i32`, if it converts.
    fn find_i32(&self, key: &str) -> Option<i32> {
        self.find(key, &NumberMapper::<i32>::new())
    }

    /// Returns the value under `key` as an `i32` or `default`.
    fn get_i32_or(&self, key: &str, default: i32) -> i32 {
        self.get_or(key, &NumberMapper::<i32>::new(), default)
    }

    /// Returns the value under `key` as an `i64`.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get`].
    fn get_i64(&self, key: &str) -> Result<i64, ConfigError> {
        self.get(key, &NumberMapper::<i64>::new())
    }

    /// Returns the value under `key` as an `i64`, if it converts.
    fn find_i64(&self, key: &str) -> Option<i64> {
        self.find(key, &NumberMapper::<i64>::new())
    }

    /// Returns the value under `key` as an `i64` or `default`.
    fn get_i64_or(&self, key: &str, default: i64) -> i64 {
        self.get_or(key, &NumberMapper::<i64>::new(), default)
    }

    /// Returns the value under `key` as an `f64`.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get`].
    fn get_f64(&self, key: &str) -> Result<f64, ConfigError> {
        self.get(key, &NumberMapper::<f64>::new())
    }

    /// Returns the value under `key` as an `f64`, if it converts.
    fn find_f64(&self, key: &str) -> Option<f64> {
        self.find(key, &NumberMapper::<f64>::new())
    }

    /// Returns the value under `key` as an `f64` or `default`.
    fn get_f64_or(&self, key: &str, default: f64) -> f64 {
        self.get_or(key, &NumberMapper::<f64>::new(), default)
    }

    /// Deserializes the value under `key` into `T`.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get`].
    fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        self.get(key, &SerdeMapper::<T>::new())
    }

    /// Deserializes the value under `key` into `T`, if it fits.
    fn find_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.find(key, &SerdeMapper::<T>::new())
    }

    /// Deserializes the value under `key` into `T` or returns `default`.
    fn get_as_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get_or(key, &SerdeMapper::<T>::new(), default)
    }

    // ------------------------------------------------------------------------
    // Nested objects
    // ------------------------------------------------------------------------

    /// Borrows the nested object under `key`, if it is an object.
    fn object(&self, key: &str) -> Option<ConfigRef<'_>> {
        self.as_map().get(key).and_then(Value::as_object).map(ConfigRef::new)
    }

    /// Returns an owned copy of the nested object under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when the key is absent or not an
    /// object.
    fn get_object(&self, key: &str) -> Result<Config, ConfigError> {
        self.find_object(key).ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    /// Returns an owned copy of the nested object under `key`, if any.
    fn find_object(&self, key: &str) -> Option<Config> {
        self.find(key, &ConfigMapper)
    }

    // ------------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------------

    /// Maps every element of the list under `key`, or returns `default` when
    /// the key is absent or not a list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mapping`] when any element does not convert.
    fn get_list_or<T, M: Mapper<T>>(
        &self,
        key: &str,
        mapper: &M,
        default: Vec<T>,
    ) -> Result<Vec<T>, ConfigError> {
        match self.as_map().get(key) {
            Some(Value::Array(items)) => items.iter().map(|item| mapper.map_strict(item)).collect(),
            _ => Ok(default),
        }
    }

    /// Maps every element of the list under `key` (empty when absent).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mapping`] when any element does not convert.
    fn get_list<T, M: Mapper<T>>(&self, key: &str, mapper: &M) -> Result<Vec<T>, ConfigError> {
        self.get_list_or(key, mapper, Vec::new())
    }

    /// Returns the list under `key` as strings.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get_list`].
    fn get_string_list(&self, key: &str) -> Result<Vec<String>, ConfigError> {
        self.get_list(key, &StringMapper)
    }

    /// Returns the list under `key` as nested configs.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get_list`].
    fn get_object_list(&self, key: &str) -> Result<Vec<Config>, ConfigError> {
        self.get_list(key, &ConfigMapper)
    }

    /// Returns the list under `key` as `i8` values.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get_list`].
    fn get_i8_list(&self, key: &str) -> Result<Vec<i8>, ConfigError> {
        self.get_list(key, &NumberMapper::<i8>::new())
    }

    /// Returns the list under `key` as `i16` values.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get_list`].
    fn get_i16_list(&self, key: &str) -> Result<Vec<i16>, ConfigError> {
        self.get_list(key, &NumberMapper::<i16>::new())
    }

    /// Returns the list under `key` as `i32` values.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get_list`].
    fn get_i32_list(&self, key: &str) -> Result<Vec<i32>, ConfigError> {
        self.get_list(key, &NumberMapper::<i32>::new())
    }

    /// Returns the list under `key` as `i64` values.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get_list`].
    fn get_i64_list(&self, key: &str) -> Result<Vec<i64>, ConfigError> {
        self.get_list(key, &NumberMapper::<i64>::new())
    }

    /// Returns the list under `key` as `f32` values.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get_list`].
    fn get_f32_list(&self, key: &str) -> Result<Vec<f32>, ConfigError> {
        self.get_list(key, &NumberMapper::<f32>::new())
    }

    /// Returns the list under `key` as `f64` values.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get_list`].
    fn get_f64_list(&self, key: &str) -> Result<Vec<f64>, ConfigError> {
        self.get_list(key, &NumberMapper::<f64>::new())
    }

    /// Returns the list under `key` as bools.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get_list`].
    fn get_bool_list(&self, key: &str) -> Result<Vec<bool>, ConfigError> {
        self.get_list(key, &BoolMapper)
    }

    /// Returns the list under `key` as chars.
    ///
    /// # Errors
    ///
    /// See [`ConfigRead::get_list`].
    fn get_char_list(&self, key: &str) -> Result<Vec<char>, ConfigError> {
        self.get_list(key, &CharMapper)
    }
}

// ============================================================================
// SECTION: Write Access
// ============================================================================

/// Mutators shared by owned and borrowed mutable configs.
pub trait ConfigWrite: ConfigRead {
    /// Returns the underlying ordered map mutably.
    fn as_map_mut(&mut self) -> &mut Map<String, Value>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.as_map_mut().insert(key.into(), value.into());
    }

    /// Serializes `value` and stores it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] when `value` cannot be represented.
    fn set_serialized<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), ConfigError> {
        let value =
            serde_json::to_value(value).map_err(|err| ConfigError::Serialize(err.to_string()))?;
        self.set(key, value);
        Ok(())
    }

    /// Removes `key`, keeping the order of the remaining entries.
    fn remove(&mut self, key: &str) -> Option<Value> {
        self.as_map_mut().shift_remove(key)
    }

    /// Replaces the value under `key` with an empty object and returns it.
    fn create_object(&mut self, key: impl Into<String>) -> ConfigMut<'_> {
        let slot = self.as_map_mut().entry(key.into()).or_insert(Value::Null);
        *slot = Value::Object(Map::new());
        ConfigMut::new(ensure_object(slot))
    }

    /// Borrows the nested object under `key` mutably, if it is an object.
    fn object_mut(&mut self, key: &str) -> Option<ConfigMut<'_>> {
        self.as_map_mut().get_mut(key).and_then(Value::as_object_mut).map(ConfigMut::new)
    }

    /// Copies every entry of `other` into this config.
    fn set_all(&mut self, other: &impl ConfigRead) {
        let map = self.as_map_mut();
        for (key, value) in other.as_map() {
            map.insert(key.clone(), value.clone());
        }
    }
}

/// Returns the object stored in `slot`, replacing any other value first.
fn ensure_object(slot: &mut Value) -> &mut Map<String, Value> {
    match slot {
        Value::Object(map) => map,
        other => {
            *other = Value::Object(Map::new());
            ensure_object(other)
        }
    }
}

// ============================================================================
// SECTION: Owned Config
// ============================================================================

/// Owned, ordered config object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    /// Entries in insertion order.
    map: Map<String, Value>,
}

impl Config {
    /// Creates an empty config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing map.
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self {
            map,
        }
    }

    /// Consumes the config and returns its entries.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }

    /// Consumes the config and returns it as an object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }
}

impl ConfigRead for Config {
    fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }
}

impl ConfigWrite for Config {
    fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.map
    }
}

impl From<Map<String, Value>> for Config {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl TryFrom<Value> for Config {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(ConfigError::cannot_map(&other, "Config")),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.map).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

// ============================================================================
// SECTION: Borrowed Views
// ============================================================================

/// Read-only view over a nested object.
#[derive(Debug, Clone, Copy)]
pub struct ConfigRef<'a> {
    /// Borrowed entries.
    map: &'a Map<String, Value>,
}

impl<'a> ConfigRef<'a> {
    /// Wraps a borrowed map.
    #[must_use]
    pub const fn new(map: &'a Map<String, Value>) -> Self {
        Self {
            map,
        }
    }

    /// Borrows a nested object with the view's own lifetime.
    #[must_use]
    pub fn child(self, key: &str) -> Option<Self> {
        self.map.get(key).and_then(Value::as_object).map(Self::new)
    }
}

impl ConfigRead for ConfigRef<'_> {
    fn as_map(&self) -> &Map<String, Value> {
        self.map
    }
}

/// Mutable view over a nested object.
#[derive(Debug)]
pub struct ConfigMut<'a> {
    /// Borrowed entries.
    map: &'a mut Map<String, Value>,
}

impl<'a> ConfigMut<'a> {
    /// Wraps a mutably borrowed map.
    pub const fn new(map: &'a mut Map<String, Value>) -> Self {
        Self {
            map,
        }
    }
}

impl ConfigRead for ConfigMut<'_> {
    fn as_map(&self) -> &Map<String, Value> {
        self.map
    }
}

impl ConfigWrite for ConfigMut<'_> {
    fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        self.map
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
        clippy::float_cmp,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use serde_json::json;

    use super::*;

    #[test]
    fn equal_contents_compare_equal() {
        let mut left = Config::new();
        left.set("blablabla", json!(["123123"]));
        let mut right = Config::new();
        right.set("blablabla", vec!["123123"]);
        assert_eq!(left, right);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut config = Config::new();
        config.set("number", 1);
        config.set("list", vec!["1", "2", "3"]);
        config.create_object("object").set("string", "321");

        let cloned = config.clone();

        config.object_mut("object").unwrap().set("string", "123");
        assert_ne!(
            config.get_object("object").unwrap().get_string("string").unwrap(),
            cloned.get_object("object").unwrap().get_string("string").unwrap()
        );

        if let Some(Value::Array(items)) = config.as_map_mut().get_mut("list") {
            items[0] = Value::Null;
        }
        assert_ne!(config.as_map().get("list"), cloned.as_map().get("list"));
        assert_eq!(config.get_raw("number").unwrap(), cloned.get_raw("number").unwrap());
    }

    #[test]
    fn object_list_maps_nested_objects() {
        let mut config = Config::new();
        config.set("list", json!([{"x": "y"}, {"a": "b"}]));

        let list = config.get_object_list("list").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].get_string("x").unwrap(), "y");
        assert_eq!(list[1].get_string("a").unwrap(), "b");
    }

    #[test]
    fn ints_cover_get_find_and_default() {
        let mut config = Config::new();
        config.set("str", "123");
        config.set("num", 321);

        assert_eq!(config.get_i32("str").unwrap(), 123);
        assert_eq!(config.get_i32("num").unwrap(), 321);
        assert_eq!(config.find_i32("str"), Some(123));
        assert_eq!(config.find_i32("idk"), None);
        assert!(config.get_i32("idk").unwrap_err().is_missing_key());
        assert_eq!(config.get_i32_or("num", 0), 321);
        assert_eq!(config.get_i32_or("idk", 666), 666);
    }

    #[test]
    fn longs_cover_get_find_and_default() {
        let mut config = Config::new();
        config.set("str", "123");
        config.set("num", 321_i64);

        assert_eq!(config.get_i64("str").unwrap(), 123);
        assert_eq!(config.find_i64("num"), Some(321));
        assert!(config.get_i64("idk").unwrap_err().is_missing_key());
        assert_eq!(config.get_i64_or("idk", 666), 666);
    }

    #[test]
    fn doubles_cover_get_find_and_default() {
        let mut config = Config::new();
        config.set("str", "123.1");
        config.set("num", 321.1);

        assert_eq!(config.get_f64("str").unwrap(), 123.1);
        assert_eq!(config.get_f64("num").unwrap(), 321.1);
        assert_eq!(config.find_f64("idk"), None);
        assert!(config.get_f64("idk").unwrap_err().is_missing_key());
        assert_eq!(config.get_f64_or("idk", 666.666), 666.666);
    }

    #[test]
    fn booleans_cover_get_find_and_default() {
        let mut config = Config::new();
        config.set("str", "true");
        config.set("num", 1);
        config.set("bool", false);

        assert!(config.get_bool("str").unwrap());
        assert!(config.get_bool("num").unwrap());
        assert!(!config.get_bool("bool").unwrap());
        assert_eq!(config.find_bool("bool"), Some(false));
        assert_eq!(config.find_bool("idk"), None);
        assert!(config.get_bool("idk").unwrap_err().is_missing_key());
        assert!(!config.get_bool_or("bool", true));
        assert!(config.get_bool_or("idk", true));
    }

    #[test]
    fn strings_cover_get_find_and_default() {
        let mut config = Config::new();
        config.set("str", "The string");
        config.set("num", 123);

        assert_eq!(config.get_string("str").unwrap(), "The string");
        assert_eq!(config.get_string("num").unwrap(), "123");
        assert_eq!(config.find_string("num").as_deref(), Some("123"));
        assert_eq!(config.find_string("idk"), None);
        assert!(config.get_string("idk").unwrap_err().is_missing_key());
        assert_eq!(config.get_string_or("idk", "default"), "default");
    }

    #[test]
    fn null_values_count_as_missing() {
        let mut config = Config::new();
        config.set("nothing", Value::Null);

        assert!(config.contains("nothing"));
        assert!(config.get_raw("nothing").unwrap_err().is_missing_key());
        assert_eq!(config.get_raw_or("nothing", json!(5)), json!(5));
    }

    #[test]
    fn unconvertible_value_is_mapping_error() {
        let mut config = Config::new();
        config.set("port", "eighty");

        let err = config.get_i32("port").unwrap_err();
        assert!(matches!(err, ConfigError::Mapping(_)));
        assert_eq!(config.get_i32_or("port", 80), 80);
    }

    #[test]
    fn list_absent_is_empty_and_bad_element_fails() {
        let mut config = Config::new();
        assert!(config.get_string_list("missing").unwrap().is_empty());

        config.set("ports", json!([1, "2", "three"]));
        assert!(matches!(config.get_i32_list("ports"), Err(ConfigError::Mapping(_))));

        config.set("ports", json!([1, "2", 3.0]));
        assert_eq!(config.get_i32_list("ports").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn list_or_returns_default_for_non_list() {
        let mut config = Config::new();
        config.set("scalar", 5);
        let list = config.get_list_or("scalar", &StringMapper, vec!["x".to_string()]).unwrap();
        assert_eq!(list, vec!["x".to_string()]);
    }

    #[test]
    fn create_object_replaces_existing_value() {
        let mut config = Config::new();
        config.set("nested", 5);
        config.create_object("nested").set("inner", true);

        assert!(config.get_object("nested").unwrap().get_bool("inner").unwrap());
    }

    #[test]
    fn create_object_clears_existing_object() {
        let mut config = Config::new();
        config.create_object("nested").set("old", 1);
        config.create_object("nested").set("new", 2);

        let nested = config.get_object("nested").unwrap();
        assert!(!nested.contains("old"));
        assert_eq!(nested.get_i32("new").unwrap(), 2);
    }

    #[test]
    fn ensure_object_keeps_objects_and_replaces_scalars() {
        let mut object = json!({"kept": 1});
        assert!(ensure_object(&mut object).contains_key("kept"));

        let mut scalar = Value::from("text");
        assert!(ensure_object(&mut scalar).is_empty());
        assert!(scalar.is_object());
    }

    #[test]
    fn get_object_rejects_scalars() {
        let mut config = Config::new();
        config.set("scalar", "text");
        assert!(config.get_object("scalar").unwrap_err().is_missing_key());
        assert!(config.find_object("scalar").is_none());
    }

    #[test]
    fn remove_preserves_order() {
        let mut config = Config::new();
        config.set("a", 1);
        config.set("b", 2);
        config.set("c", 3);
        config.remove("a");

        let keys: Vec<&str> = config.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn set_all_copies_entries() {
        let mut source = Config::new();
        source.set("a", 1);
        let mut target = Config::new();
        target.set("b", 2);
        target.set_all(&source);

        assert_eq!(target.len(), 2);
        assert_eq!(target.get_i32("a").unwrap(), 1);
    }

    #[test]
    fn as_type_binds_struct() {
        #[derive(Deserialize)]
        struct Dummy {
            message: String,
        }

        let mut config = Config::new();
        config.set("message", "foo bar baz");
        let dummy: Dummy = config.as_type().unwrap();
        assert_eq!(dummy.message, "foo bar baz");
    }

    #[test]
    fn try_from_value_requires_object() {
        assert!(Config::try_from(json!({"a": 1})).is_ok());
        assert!(matches!(Config::try_from(json!([1])), Err(ConfigError::Mapping(_))));
    }

    #[test]
    fn display_renders_compact_json() {
        let mut config = Config::new();
        config.set("a", 1);
        assert_eq!(config.to_string(), r#"{"a":1}"#);
    }
}
