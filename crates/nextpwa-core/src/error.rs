//! Unified error types for the nextpwa scaffolder.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during nextpwa operations.
#[derive(Error, Debug)]
pub enum NextPwaError {
    // --- Templates ---

    /// Handlebars rendering failed (malformed template or missing variable).
    ///
    /// The embedded catalog is covered by tests, so hitting this at runtime
    /// means a template was changed without updating the render context.
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    /// The requested output path is not in the template catalog.
    #[error("no such template: {0} (see `nextpwa list` for available paths)")]
    UnknownTemplate(String),

    // --- Project ---

    /// Attempted to scaffold into a directory that already exists.
    #[error("project directory already exists: {0}")]
    ProjectExists(PathBuf),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, NextPwaError>`.
pub type Result<T> = std::result::Result<T, NextPwaError>;
