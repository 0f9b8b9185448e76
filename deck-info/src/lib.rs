//! Build metadata for the Deck tools.
//!
//! Other crates read the version and description from here instead of
//! hard-coding them, so a release only has to bump `Cargo.toml`.

/// Version identifier of this build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Numeric form of [`VERSION`] as `(major, minor, patch)`.
///
/// Missing or non-numeric components read as `0`; pre-release and build
/// suffixes are ignored.
pub fn version_info() -> (u64, u64, u64) {
    parse_version(VERSION)
}

/// Human readable summary of what Deck is.
pub fn description() -> &'static str {
    "Deck: a sandboxed desktop with a daemon that exposes terminals, processes and computer use to agents"
}

fn parse_version(version: &str) -> (u64, u64, u64) {
    let core = version.split(['-', '+']).next().unwrap_or_default();
    let mut parts = core.split('.').map(|part| {
        let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
        digits.parse::<u64>().unwrap_or(0)
    });
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}
