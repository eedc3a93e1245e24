// crates/cfgbind/src/lib.rs
// ============================================================================
// Module: cfgbind
// Description: Typed configuration loading for JSON, YAML, and TOML.
// Purpose: Bind configuration documents to Rust types and navigate them.
// Dependencies: serde, serde_json, serde_yaml, toml, thiserror, tracing
// ============================================================================

//! ## Overview
//! `cfgbind` loads configuration documents into typed values. A
//! [`ConfigProvider`] parses text of one [`ConfigFormat`] and either binds it
//! directly to a `serde` type or yields a generic [`Config`] object with
//! typed getters, [`Mapper`]-based conversion, and dotted-path access.
//!
//! Types that must be built through an explicit constructor implement
//! [`Construct`]; that path is gated by the `constructor-binding` capability
//! reported by [`interop::is_available`].
//!
//! Inputs are bounded by [`LoaderOptions`] and every failure is reported as
//! a [`ConfigError`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod binding;
pub mod config;
pub mod error;
pub mod file;
pub mod format;
pub mod interop;
pub mod mapper;
pub mod options;
pub mod path;
pub mod provider;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use binding::Arguments;
pub use binding::Construct;
pub use binding::Param;
pub use config::Config;
pub use config::ConfigMut;
pub use config::ConfigRead;
pub use config::ConfigRef;
pub use config::ConfigWrite;
pub use error::ConfigError;
pub use error::ConfigResult;
pub use file::FileConfig;
pub use format::ConfigFormat;
pub use mapper::Mapper;
pub use options::LoaderOptions;
pub use path::ConfigPath;
pub use provider::ConfigProvider;
pub use provider::ProviderBuilder;
