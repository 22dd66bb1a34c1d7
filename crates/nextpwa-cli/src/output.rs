//! Terminal output formatting for the nextpwa CLI.
//!
//! Consistent, colored output via the [`console`] crate.

use console::style;

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("-".repeat(text.len())).dim());
}

/// Print a success line prefixed with a green check mark.
pub fn print_success(text: &str) {
    println!("{} {}", style("✓").green().bold(), text);
}

/// Print a warning line prefixed with a yellow `!`.
pub fn print_warning(text: &str) {
    println!("{} {}", style("!").yellow().bold(), text);
}

/// Print a progress step indicator like `[2/3] Rendering templates`.
pub fn print_step(step: u32, total: u32, text: &str) {
    println!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print one catalog path, marking entries that substitute the project name.
pub fn print_catalog_path(path: &str, templated: bool) {
    if templated {
        println!("  {} {}", path, style("(name substituted)").dim());
    } else {
        println!("  {path}");
    }
}
