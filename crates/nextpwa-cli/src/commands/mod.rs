//! CLI command implementations for nextpwa.
//!
//! Each module corresponds to a subcommand (`nextpwa <command>`).

pub mod check;
pub mod list;
pub mod new;
pub mod show;
