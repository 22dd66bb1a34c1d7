//! Prerequisite checks for the generated project's toolchain.
//!
//! The scaffolder itself has no external dependencies; `node` and `npm` are
//! only needed to *run* what it generates. Checks therefore produce warnings,
//! never hard errors.

use tracing::debug;

use crate::version::{detect_version, Version};

/// Node.js 18.17 is the minimum the generated Next.js 16 project supports.
pub const NODE_MIN_VERSION: Version = Version::new(18, 17, 0);

/// A tool the generated project needs at runtime.
struct Tool {
    name: &'static str,
    minimum: Option<Version>,
    install: &'static str,
}

const TOOLS: &[Tool] = &[
    Tool {
        name: "node",
        minimum: Some(NODE_MIN_VERSION),
        install: "https://nodejs.org/ (18.17 or later)",
    },
    Tool {
        name: "npm",
        minimum: None,
        install: "ships with Node.js",
    },
];

/// A single prerequisite finding.
#[derive(Debug, Clone)]
pub enum PrereqWarning {
    /// The tool is not on PATH.
    Missing {
        tool: &'static str,
        install: &'static str,
    },
    /// The tool is present but older than the recommended minimum.
    Outdated {
        tool: &'static str,
        found: Version,
        minimum: Version,
    },
}

impl PrereqWarning {
    pub fn message(&self) -> String {
        match self {
            Self::Missing { tool, install } => {
                format!("{tool} not found — install: {install}")
            }
            Self::Outdated {
                tool,
                found,
                minimum,
            } => {
                format!("{tool}: found v{found}, minimum v{minimum} recommended")
            }
        }
    }
}

/// Check for the Node toolchain, returning one warning per finding.
///
/// An empty result means everything required to `npm install && npm run dev`
/// the generated project is present.
pub fn check() -> Vec<PrereqWarning> {
    let mut warnings = Vec::new();

    for tool in TOOLS {
        if which::which(tool.name).is_err() {
            warnings.push(PrereqWarning::Missing {
                tool: tool.name,
                install: tool.install,
            });
            continue;
        }

        let found = detect_version(tool.name);
        debug!(tool = tool.name, version = ?found, "detected prerequisite");

        if let (Some(found), Some(minimum)) = (found, tool.minimum) {
            if found < minimum {
                warnings.push(PrereqWarning::Outdated {
                    tool: tool.name,
                    found,
                    minimum,
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_warning_names_the_tool() {
        let w = PrereqWarning::Missing {
            tool: "node",
            install: "https://nodejs.org/",
        };
        assert!(w.message().contains("node not found"));
    }

    #[test]
    fn test_outdated_warning_shows_both_versions() {
        let w = PrereqWarning::Outdated {
            tool: "node",
            found: Version::new(16, 20, 0),
            minimum: NODE_MIN_VERSION,
        };
        let msg = w.message();
        assert!(msg.contains("16.20.0"));
        assert!(msg.contains("18.17.0"));
    }
}
