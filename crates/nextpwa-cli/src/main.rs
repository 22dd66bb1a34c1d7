//! nextpwa CLI — scaffold a production-ready Next.js 16 Progressive Web App.
//!
//! Four commands: `new` (scaffold a project), `list` (print the template
//! catalog), `show` (render one template to stdout), and `check` (Node
//! toolchain check). The template catalog and emission logic live in
//! [`nextpwa_core`].

mod commands;
mod output;

use clap::{Parser, Subcommand};
use nextpwa_core::catalog::DEFAULT_PROJECT_NAME;

#[derive(Parser)]
#[command(
    name = "nextpwa",
    about = "Scaffold a Next.js 16 PWA — manifest, service worker, Swagger docs, logging",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new Next.js 16 PWA project
    New {
        /// Project name (creates a directory with this name; prompts if omitted)
        name: Option<String>,
    },

    /// List every file the scaffolder generates
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a single template to stdout
    Show {
        /// Catalog path of the template (e.g. public/manifest.json)
        path: String,

        /// Project name to substitute
        #[arg(long, default_value = DEFAULT_PROJECT_NAME)]
        name: String,
    },

    /// Check for the Node.js toolchain the generated project needs
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::New { name } => commands::new::run(name)?,
        Commands::List { json } => commands::list::run(json)?,
        Commands::Show { path, name } => commands::show::run(&path, &name)?,
        Commands::Check => commands::check::run()?,
    }

    Ok(())
}
