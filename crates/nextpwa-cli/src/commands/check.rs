use anyhow::Result;

use nextpwa_core::prereq;
use nextpwa_core::version::detect_version;

use crate::output;

/// Check for the Node.js toolchain the generated project needs.
pub fn run() -> Result<()> {
    output::print_header("nextpwa check");

    for tool in ["node", "npm"] {
        match detect_version(tool) {
            Some(v) => output::print_key_value(tool, &format!("v{v}")),
            None => output::print_key_value(tool, "not found"),
        }
    }

    let warnings = prereq::check();
    if warnings.is_empty() {
        output::print_success("All prerequisites satisfied");
    } else {
        for w in &warnings {
            output::print_warning(&w.message());
        }
    }

    Ok(())
}
