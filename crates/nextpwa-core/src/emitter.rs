//! Emission driver: writes rendered files to the project directory.
//!
//! One sequential filesystem write per rendered file, in catalog order, each
//! awaited before the next. Parent directories are created per file so the
//! emitter doesn't need to know the directory layout up front. I/O errors
//! propagate immediately; there is no rollback of files already written.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::RenderedFile;
use crate::error::Result;

/// What an emission pass wrote, in order.
#[derive(Debug, Clone)]
pub struct EmitSummary {
    /// Absolute paths of the files written, in emission order.
    pub written: Vec<PathBuf>,
    /// Total bytes written.
    pub bytes: u64,
}

/// Write every rendered file under `project_dir`, in sequence.
///
/// The per-file callback is invoked after each successful write; the CLI uses
/// it to advance its progress bar.
pub fn emit_all(
    project_dir: &Path,
    files: &[RenderedFile],
    mut on_write: impl FnMut(&RenderedFile),
) -> Result<EmitSummary> {
    let mut written = Vec::with_capacity(files.len());
    let mut bytes = 0u64;

    for file in files {
        let dest = project_dir.join(file.path);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&dest, &file.content)?;
        debug!(path = %dest.display(), bytes = file.content.len(), "wrote file");

        bytes += file.content.len() as u64;
        written.push(dest);
        on_write(file);
    }

    info!(
        files = written.len(),
        bytes,
        dir = %project_dir.display(),
        "emission complete"
    );
    Ok(EmitSummary { written, bytes })
}
