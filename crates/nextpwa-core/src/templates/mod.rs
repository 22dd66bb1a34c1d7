//! Template system for nextpwa project scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! The only template variable is `{{project_name}}` — the user-supplied project
//! name, substituted verbatim.
//!
//! ## Adding a new template
//!
//! 1. Create the file under `templates/nextjs/` (add a `.tmpl` suffix if it uses
//!    the placeholder)
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Register it in the catalog (`crate::catalog::CATALOG`)
//! 4. Run `cargo build` to verify the path resolves
//!
//! **Warning**: Template files in `templates/nextjs/` and constants in [`embedded`]
//! must stay in sync. The `include_str!` paths are relative to the `embedded`
//! source file and checked at compile-time.

pub mod embedded;
pub mod renderer;
