//! Compile-time embedded Next.js project templates.
//!
//! Each constant loads a file from the top-level `templates/nextjs/` directory via
//! [`include_str!`]. The paths are relative to this source file
//! (`crates/nextpwa-core/src/templates/embedded.rs`).
//!
//! Files with a `.tmpl` suffix contain the `{{project_name}}` placeholder and are
//! rendered through [`super::renderer::TemplateRenderer`]; the rest are emitted
//! byte-for-byte. The `.gitignore` template is stored as `gitignore` (no dot) so
//! its patterns don't apply to this repository.
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!` path
//! here, and do not add `{{` sequences to a `.tmpl` file unless they are a
//! Handlebars expression — generated JSX keeps its style objects in named consts
//! for exactly this reason.

// -------------------------------------------------------
// Project root
// -------------------------------------------------------

pub const PACKAGE_JSON: &str = include_str!("../../../../templates/nextjs/package.json.tmpl");
pub const NEXT_CONFIG: &str = include_str!("../../../../templates/nextjs/next.config.js");
pub const README: &str = include_str!("../../../../templates/nextjs/README.md.tmpl");
pub const GITIGNORE: &str = include_str!("../../../../templates/nextjs/gitignore");
pub const JSCONFIG: &str = include_str!("../../../../templates/nextjs/jsconfig.json");

// -------------------------------------------------------
// PWA assets
// -------------------------------------------------------

pub const PWA_MANIFEST: &str = include_str!("../../../../templates/nextjs/public/manifest.json.tmpl");
pub const SERVICE_WORKER: &str = include_str!("../../../../templates/nextjs/public/sw.js");

// -------------------------------------------------------
// App Router pages
// -------------------------------------------------------

pub const APP_LAYOUT: &str = include_str!("../../../../templates/nextjs/app/layout.js.tmpl");
pub const APP_PAGE: &str = include_str!("../../../../templates/nextjs/app/page.js.tmpl");
pub const APP_ERROR: &str = include_str!("../../../../templates/nextjs/app/error.js");
pub const APP_NOT_FOUND: &str = include_str!("../../../../templates/nextjs/app/not-found.js");
pub const API_DOCS_PAGE: &str = include_str!("../../../../templates/nextjs/app/api-docs/page.js");

// -------------------------------------------------------
// API routes
// -------------------------------------------------------

pub const API_SWAGGER_ROUTE: &str = include_str!("../../../../templates/nextjs/app/api/swagger/route.js.tmpl");
pub const API_HEALTH_ROUTE: &str = include_str!("../../../../templates/nextjs/app/api/health/route.js");
pub const API_USERS_ROUTE: &str = include_str!("../../../../templates/nextjs/app/api/users/route.js");

// -------------------------------------------------------
// Optional lib/ utilities
// -------------------------------------------------------

pub const LIB_LOGGER: &str = include_str!("../../../../templates/nextjs/lib/logger.js");
pub const LIB_SWAGGER: &str = include_str!("../../../../templates/nextjs/lib/swagger.js");
