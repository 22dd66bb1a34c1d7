//! Core library for the nextpwa scaffolder.
//!
//! Two components do all the work: the template catalog ([`catalog`]), an
//! ordered compile-time table of output paths and embedded bodies with
//! verbatim project-name substitution, and the emission driver ([`emitter`]),
//! which writes each rendered file into the project directory in catalog
//! order. Everything else is supporting cast: error types, Handlebars
//! rendering, project-directory creation, and best-effort Node toolchain
//! checks for the generated project.

pub mod catalog;
pub mod emitter;
pub mod error;
pub mod prereq;
pub mod project;
pub mod templates;
pub mod version;
