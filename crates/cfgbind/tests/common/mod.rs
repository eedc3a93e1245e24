// crates/cfgbind/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for cfgbind integration tests.
// Purpose: Reduce duplication across provider, binding, and file suites.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::sync::Once;

use cfgbind::Config;
use cfgbind::ConfigError;
use cfgbind::ConfigProvider;
use tracing_subscriber::EnvFilter;

/// Guards one-time subscriber installation.
static TRACING: Once = Once::new();

/// Installs a test-writer subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Parses YAML with the shared provider.
pub fn yaml(input: &str) -> Result<Config, String> {
    init_tracing();
    ConfigProvider::yaml().parse(input).map_err(|err| err.to_string())
}

/// Parses JSON with the shared provider.
pub fn json(input: &str) -> Result<Config, String> {
    init_tracing();
    ConfigProvider::json().parse(input).map_err(|err| err.to_string())
}

/// Checks that `result` failed with an error whose message contains `needle`.
pub fn expect_error<T>(result: Result<T, ConfigError>, needle: &str) -> Result<ConfigError, String> {
    match result {
        Err(error) if error.to_string().contains(needle) => Ok(error),
        Err(error) => Err(format!("error {error} did not contain {needle}")),
        Ok(_) => Err(format!("expected error containing {needle}")),
    }
}
