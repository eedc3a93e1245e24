// crates/cfgbind/src/interop.rs
// ============================================================================
// Module: Constructor Binding Capability
// Description: Process-wide probe for the constructor binding convention.
// Purpose: Let callers gate `Construct`-based loading on build capabilities.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! Constructor binding ([`crate::Construct`]) is an optional capability
//! compiled in through the `constructor-binding` cargo feature. The probe is
//! an explicit feature lookup, computed once per process and constant for
//! its lifetime; concurrent callers share the memoized answer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

use tracing::debug;

use crate::provider::ProviderBuilder;

// ============================================================================
// SECTION: Capability Probe
// ============================================================================

/// Memoized capability flag.
static AVAILABLE: OnceLock<bool> = OnceLock::new();

/// Returns whether constructor binding is available in this build.
#[must_use]
pub fn is_available() -> bool {
    *AVAILABLE.get_or_init(|| {
        let available = cfg!(feature = "constructor-binding");
        debug!(available, "probed constructor binding capability");
        available
    })
}

/// Enables constructor binding on `builder` when the capability is present.
pub fn try_enable(builder: &mut ProviderBuilder) {
    if is_available() {
        builder.enable_constructor_binding();
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
