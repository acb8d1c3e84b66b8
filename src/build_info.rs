//! Compile-time build metadata exposed on the CLI version surface.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("ARTSY_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("ARTSY_BUILD_TIMESTAMP");

/// Render the version block used by `artsy --version`.
pub fn cli_version_text() -> String {
    format!("artsy {VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}
