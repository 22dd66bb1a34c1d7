use std::path::Path;

use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use nextpwa_core::catalog::{self, DEFAULT_PROJECT_NAME};
use nextpwa_core::{emitter, prereq, project};

use crate::output;

/// Scaffold a new Next.js 16 PWA project.
///
/// Creates the project directory, renders the full template catalog with the
/// project name substituted, writes every file in catalog order, and checks
/// for the Node toolchain. If no name is given, prompts with the same default
/// the original generator pre-filled.
pub fn run(name: Option<String>) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Project name")
            .default(DEFAULT_PROJECT_NAME.to_string())
            .interact_text()?,
    };

    output::print_header(&format!("nextpwa new: {name}"));

    let project_dir = Path::new(&name);
    output::print_step(1, 3, &format!("Creating project directory: {name}/"));
    project::create_project_dir(project_dir)?;

    output::print_step(2, 3, "Rendering and writing templates");
    let files = catalog::render(&name)?;

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("  [{bar:30}] {pos}/{len} {msg}")?.progress_chars("=> "),
    );
    let summary = emitter::emit_all(project_dir, &files, |file| {
        bar.set_message(file.path);
        bar.inc(1);
    })?;
    bar.finish_and_clear();
    output::print_success(&format!(
        "{} files written ({} bytes)",
        summary.written.len(),
        summary.bytes
    ));

    output::print_step(3, 3, "Checking prerequisites");
    let warnings = prereq::check();
    if warnings.is_empty() {
        output::print_success("Node toolchain found");
    } else {
        for w in &warnings {
            output::print_warning(&w.message());
        }
    }

    output::print_success(&format!("Project '{name}' created"));
    println!();
    println!("  Next steps:");
    println!("    cd {name}");
    println!("    npm install");
    println!("    npm run dev");
    println!();

    Ok(())
}
