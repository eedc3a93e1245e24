//! Format parsing tests for cfgbind.
// crates/cfgbind/tests/provider_formats.rs
// =============================================================================
// Module: Provider Format Tests
// Description: Validate YAML, JSON, and TOML parsing into config objects.
// Purpose: Ensure keys, scalars, and nested lists survive every format.
// =============================================================================

mod common;

use cfgbind::Config;
use cfgbind::ConfigError;
use cfgbind::ConfigProvider;
use cfgbind::ConfigRead;
use cfgbind::ConfigWrite;
use serde::Deserialize;

type TestResult = Result<(), String>;

fn key_list(config: &Config, key: &str) -> Result<Vec<String>, String> {
    let object = config.find_object(key).ok_or_else(|| format!("missing object {key}"))?;
    Ok(object.keys().cloned().collect())
}

#[test]
fn yaml_word_key_stays_a_string() -> TestResult {
    let config = common::yaml("keys:\n  yes: 111\n")?;
    if config.len() != 1 {
        return Err(format!("expected one entry, got {}", config.len()));
    }
    let keys = key_list(&config, "keys")?;
    if keys != ["yes"] {
        return Err(format!("unexpected keys {keys:?}"));
    }
    Ok(())
}

#[test]
fn yaml_boolean_key_is_stringified() -> TestResult {
    let config = common::yaml("keys:\n  true: 111\n")?;
    let keys = key_list(&config, "keys")?;
    if keys != ["true"] {
        return Err(format!("unexpected keys {keys:?}"));
    }
    Ok(())
}

#[test]
fn yaml_integer_key_is_stringified() -> TestResult {
    let config = common::yaml("keys:\n  123: 111\n")?;
    if config.is_empty() {
        return Err("config should not be empty".to_string());
    }
    let keys = key_list(&config, "keys")?;
    if keys != ["123"] {
        return Err(format!("unexpected keys {keys:?}"));
    }
    let nested = config.get_object("keys").map_err(|err| err.to_string())?;
    if nested.get_i32("123").map_err(|err| err.to_string())? != 111 {
        return Err("stringified key lost its value".to_string());
    }
    Ok(())
}

#[test]
fn yaml_scalars_parse() -> TestResult {
    let config = common::yaml("message: 'Hello world!'\ncounter: 1234567890\n")?;
    if config.get_string("message").map_err(|err| err.to_string())? != "Hello world!" {
        return Err("message mismatch".to_string());
    }
    if config.get_i32("counter").map_err(|err| err.to_string())? != 1_234_567_890 {
        return Err("counter mismatch".to_string());
    }
    Ok(())
}

#[test]
fn yaml_object_list_keeps_order() -> TestResult {
    let config = common::yaml(
        "items:\n  - id: 'a'\n    counter: 0\n  - id: 'b'\n    counter: 1\n  - id: 'c'\n    counter: 2\n",
    )?;
    let items = config.get_object_list("items").map_err(|err| err.to_string())?;
    if items.len() != 3 {
        return Err(format!("expected three items, got {}", items.len()));
    }
    for (index, (item, expected)) in items.iter().zip(["a", "b", "c"]).enumerate() {
        let id = item.get_string("id").map_err(|err| err.to_string())?;
        let counter = item.get_i64("counter").map_err(|err| err.to_string())?;
        if id != expected || counter != i64::try_from(index).map_err(|err| err.to_string())? {
            return Err(format!("item {index} was {id}/{counter}"));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct Nested {
    nested: Config,
    list: Vec<Config>,
    text: String,
}

#[test]
fn config_fields_deserialize_inside_typed_values() -> TestResult {
    let config = common::yaml(
        "nested:\n  id: 1\n  name: '1'\nlist:\n  - id: 1\n    name: '1'\n  - id: 2\n    name: '2'\ntext: '3'\n",
    )?;
    let result: Nested = config.as_type().map_err(|err| err.to_string())?;
    if result.text != "3" {
        return Err(format!("unexpected text {}", result.text));
    }
    if result.nested.get_i32("id").map_err(|err| err.to_string())? != 1
        || result.nested.get_string("name").map_err(|err| err.to_string())? != "1"
    {
        return Err("nested config mismatch".to_string());
    }
    for (item, expected) in result.list.iter().zip([1, 2]) {
        if item.get_i32("id").map_err(|err| err.to_string())? != expected
            || item.get_string("name").map_err(|err| err.to_string())? != expected.to_string()
        {
            return Err(format!("list item {expected} mismatch"));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct Dummy {
    message: String,
}

#[test]
fn as_type_binds_parsed_config() -> TestResult {
    let config = common::yaml("message: 'foo bar baz'\n")?;
    let dummy: Dummy = config.as_type().map_err(|err| err.to_string())?;
    if dummy.message != "foo bar baz" {
        return Err(format!("unexpected message {}", dummy.message));
    }
    Ok(())
}

#[test]
fn toml_tables_and_datetimes_parse() -> TestResult {
    let config = ConfigProvider::toml()
        .parse("[server]\nport = 8080\nstarted = 1979-05-27T07:32:00Z\n")
        .map_err(|err| err.to_string())?;
    let port = config.path("server.port").as_i32().map_err(|err| err.to_string())?;
    let started = config.path("server.started").as_string().map_err(|err| err.to_string())?;
    if port != 8080 || started != "1979-05-27T07:32:00Z" {
        return Err(format!("unexpected server {port}/{started}"));
    }
    Ok(())
}

#[test]
fn malformed_documents_are_parse_errors() -> TestResult {
    let inputs = [
        (ConfigProvider::json(), "{\"a\": "),
        (ConfigProvider::yaml(), "a: [1, 2\n"),
        (ConfigProvider::toml(), "a = \n"),
    ];
    for (provider, input) in inputs {
        match provider.parse(input) {
            Err(ConfigError::Parse(_)) => {}
            other => return Err(format!("{} produced {other:?}", provider.format())),
        }
    }
    Ok(())
}

#[test]
fn saved_output_parses_back_in_each_format() -> TestResult {
    let mut config = Config::new();
    config.set("name", "demo");
    config.create_object("limits").set("max", 5);
    for provider in [ConfigProvider::json(), ConfigProvider::yaml(), ConfigProvider::toml()] {
        let text = provider.save_to_string(&config).map_err(|err| err.to_string())?;
        let parsed = provider.parse(&text).map_err(|err| err.to_string())?;
        if parsed != config {
            return Err(format!("{} output did not parse back: {text}", provider.format()));
        }
    }
    Ok(())
}

#[test]
fn toml_non_finite_float_is_mapping_error() -> TestResult {
    for input in ["x = nan\n", "x = inf\n", "x = -inf\n"] {
        match ConfigProvider::toml().parse(input) {
            Err(ConfigError::Mapping(message)) if message.contains("finite number") => {}
            other => return Err(format!("input {input:?} produced {other:?}")),
        }
    }
    let config = ConfigProvider::toml().parse("x = 1.5\n").map_err(|err| err.to_string())?;
    let x = config.get_f64("x").map_err(|err| err.to_string())?;
    if (x - 1.5).abs() > f64::EPSILON {
        return Err("finite float lost".to_string());
    }
    Ok(())
}

#[test]
fn yaml_keys_that_collide_after_stringify_are_mapping_errors() -> TestResult {
    common::expect_error(ConfigProvider::yaml().parse("keys:\n  1: a\n  '1': b\n"), "duplicate yaml key 1")?;
    Ok(())
}
