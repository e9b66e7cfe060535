//! Fuzz target for the TOML configuration parser.
//!
//! Run with: cargo +nightly fuzz run fuzz_config_parser
//!
//! Feeds arbitrary text to `AppConfig::parse()`. Anything that parses and
//! validates must also build an engine and serialize back to JSON.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = siegel_config::AppConfig::parse(s) {
        assert!(siegel_core::RiemannSiegel::from_config(&config).is_ok());
        assert!(config.to_json_pretty().is_ok());
    }
});
