//! Version parsing and detection for the Node.js toolchain.
//!
//! Scaffolding never requires Node — the generated project does. Detection is
//! therefore best-effort: if a tool is absent or prints something unexpected,
//! parsing returns `None` and the caller downgrades to a warning.

use std::fmt;
use std::process::Command;

/// A semver-like version with major.minor.patch components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse the first `X.Y.Z` found in a version banner.
    ///
    /// Handles the formats the Node toolchain actually prints:
    /// `"v20.11.1"` (node), `"10.2.4"` (npm), and banners with leading text.
    pub fn parse(s: &str) -> Option<Self> {
        let rest = s.trim_start_matches(|c: char| !c.is_ascii_digit());
        let mut parts = rest
            .split(|c: char| !c.is_ascii_digit())
            .take(3)
            .map(|p| p.parse::<u32>().ok());
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Some(major)), Some(Some(minor)), Some(Some(patch))) => {
                Some(Self::new(major, minor, patch))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Run `tool --version` and parse the output.
///
/// Returns `None` if the tool is not on PATH, exits non-zero, or prints
/// something without an `X.Y.Z` pattern.
pub fn detect_version(tool: &str) -> Option<Version> {
    let output = Command::new(tool).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if let Some(v) = Version::parse(&stdout) {
        return Some(v);
    }

    // Some tools print their banner to stderr
    Version::parse(&String::from_utf8_lossy(&output.stderr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(Version::parse("10.2.4"), Some(Version::new(10, 2, 4)));
    }

    #[test]
    fn test_parse_node_style_v_prefix() {
        assert_eq!(Version::parse("v20.11.1"), Some(Version::new(20, 11, 1)));
    }

    #[test]
    fn test_parse_with_leading_text() {
        assert_eq!(Version::parse("node v18.17.0"), Some(Version::new(18, 17, 0)));
    }

    #[test]
    fn test_parse_trailing_newline() {
        assert_eq!(Version::parse("10.2.4\n"), Some(Version::new(10, 2, 4)));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(Version::parse("not a version"), None);
        assert_eq!(Version::parse(""), None);
        assert_eq!(Version::parse("18.17"), None);
    }

    #[test]
    fn test_ordering() {
        let min = Version::new(18, 17, 0);
        assert!(Version::parse("v20.11.1").unwrap() >= min);
        assert!(Version::parse("18.16.9").unwrap() < min);
    }

    #[test]
    fn test_display_roundtrip() {
        let v = Version::new(18, 17, 0);
        assert_eq!(Version::parse(&v.to_string()), Some(v));
    }
}
