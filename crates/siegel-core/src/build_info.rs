//! Build-time metadata embedded by the build script.
//!
//! Lets CLI output and bug reports name the exact build that produced a
//! number, since floating-point results can differ across targets.

/// The git commit hash at build time (short form).
pub const GIT_HASH: &str = env!("SIEGEL_GIT_HASH");

/// The build profile (`debug` or `release`).
pub const BUILD_PROFILE: &str = env!("SIEGEL_BUILD_PROFILE");

/// The target triple, e.g. `x86_64-unknown-linux-gnu`.
pub const BUILD_TARGET: &str = env!("SIEGEL_BUILD_TARGET");

/// The crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Return a formatted version string including git hash, profile and target.
///
/// Example: `"0.1.0 (abc1234, debug, x86_64-unknown-linux-gnu)"`
pub fn version_string() -> String {
    format!("{VERSION} ({GIT_HASH}, {BUILD_PROFILE}, {BUILD_TARGET})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string_not_empty() {
        let v = version_string();
        assert!(!v.is_empty());
        assert!(v.contains(VERSION));
        assert!(v.contains(BUILD_TARGET));
    }

    #[test]
    fn test_git_hash_not_empty() {
        assert!(!GIT_HASH.is_empty());
    }

    #[test]
    fn test_build_profile() {
        // In test mode, profile is "debug"
        assert_eq!(BUILD_PROFILE, "debug");
    }
}
