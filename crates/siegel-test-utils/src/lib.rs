#![deny(unsafe_code)]

//! Shared test utilities for the Siegel workspace.
//!
//! Provides known ζ values, config builders, temporary config files and
//! tracing helpers so that individual crate tests stay concise.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! siegel-test-utils = { workspace = true }
//! ```

pub mod config;
pub mod fixtures;
pub mod temp_config;
pub mod tracing_setup;
