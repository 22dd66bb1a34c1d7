//! Project directory creation for the `new` command.
//!
//! The scaffolded layout is fixed by the catalog:
//! ```text
//! <project>/
//! ├── package.json
//! ├── next.config.js
//! ├── jsconfig.json
//! ├── README.md
//! ├── .gitignore
//! ├── app/                # App Router pages + API routes
//! ├── lib/                # optional logger/swagger utilities
//! └── public/             # PWA manifest + service worker
//! ```
//! Subdirectories are created lazily by the emitter, per file. This module
//! only claims the project root.

use std::path::Path;

use crate::error::{NextPwaError, Result};

/// Create the project root directory.
///
/// Refuses to touch an existing directory so a typo'd name can never
/// overwrite someone's work. The name is otherwise taken as-is; a name
/// containing path separators creates nested directories.
pub fn create_project_dir(project_dir: &Path) -> Result<()> {
    if project_dir.exists() {
        return Err(NextPwaError::ProjectExists(project_dir.to_path_buf()));
    }
    std::fs::create_dir_all(project_dir)?;
    Ok(())
}
