//! The fixed template catalog: every file a scaffolded project contains.
//!
//! The catalog is an ordered, compile-time constant list of relative output
//! paths and their embedded bodies. Order matters only for emission order;
//! paths are unique (enforced by test). Entries flagged `templated` contain
//! the `{{project_name}}` placeholder and pass through the Handlebars
//! renderer; the rest are copied byte-for-byte.
//!
//! [`render`] is a pure function of the project name: any string is accepted,
//! including the empty string, and no sanitization is applied (see DESIGN.md
//! for why this gap is deliberate).

use serde::Serialize;
use serde_json::json;

use crate::error::{NextPwaError, Result};
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// Name pre-filled when the user doesn't supply one.
pub const DEFAULT_PROJECT_NAME: &str = "my-nextjs-app";

/// One entry of the fixed catalog: a relative output path and its body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateEntry {
    /// Relative output path within the scaffolded project.
    pub path: &'static str,
    /// Embedded template body.
    #[serde(skip)]
    pub body: &'static str,
    /// Whether the body contains the `{{project_name}}` placeholder.
    pub templated: bool,
}

impl TemplateEntry {
    const fn templated(path: &'static str, body: &'static str) -> Self {
        Self {
            path,
            body,
            templated: true,
        }
    }

    const fn verbatim(path: &'static str, body: &'static str) -> Self {
        Self {
            path,
            body,
            templated: false,
        }
    }
}

/// A catalog entry after substitution, ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFile {
    pub path: &'static str,
    pub content: String,
}

/// The full artifact set of a scaffolded project, in emission order.
///
/// This list and the placeholder slots within the `.tmpl` bodies are the
/// externally observable contract of the scaffolder.
pub const CATALOG: &[TemplateEntry] = &[
    TemplateEntry::templated("package.json", embedded::PACKAGE_JSON),
    TemplateEntry::verbatim("next.config.js", embedded::NEXT_CONFIG),
    TemplateEntry::templated("public/manifest.json", embedded::PWA_MANIFEST),
    TemplateEntry::verbatim("public/sw.js", embedded::SERVICE_WORKER),
    TemplateEntry::templated("app/layout.js", embedded::APP_LAYOUT),
    TemplateEntry::templated("app/page.js", embedded::APP_PAGE),
    TemplateEntry::verbatim("app/error.js", embedded::APP_ERROR),
    TemplateEntry::verbatim("app/not-found.js", embedded::APP_NOT_FOUND),
    TemplateEntry::verbatim("app/api-docs/page.js", embedded::API_DOCS_PAGE),
    TemplateEntry::templated("app/api/swagger/route.js", embedded::API_SWAGGER_ROUTE),
    TemplateEntry::verbatim("app/api/health/route.js", embedded::API_HEALTH_ROUTE),
    TemplateEntry::verbatim("app/api/users/route.js", embedded::API_USERS_ROUTE),
    TemplateEntry::verbatim("lib/logger.js", embedded::LIB_LOGGER),
    TemplateEntry::verbatim("lib/swagger.js", embedded::LIB_SWAGGER),
    TemplateEntry::templated("README.md", embedded::README),
    TemplateEntry::verbatim(".gitignore", embedded::GITIGNORE),
    TemplateEntry::verbatim("jsconfig.json", embedded::JSCONFIG),
];

/// The catalog's path list, in emission order.
pub fn paths() -> Vec<&'static str> {
    CATALOG.iter().map(|e| e.path).collect()
}

/// Render the whole catalog with `project_name` substituted verbatim into
/// every placeholder slot, in catalog order.
pub fn render(project_name: &str) -> Result<Vec<RenderedFile>> {
    let renderer = TemplateRenderer::new();
    let data = json!({ "project_name": project_name });

    CATALOG
        .iter()
        .map(|entry| render_entry(entry, &renderer, &data))
        .collect()
}

/// Render a single catalog entry by its output path.
pub fn render_one(path: &str, project_name: &str) -> Result<RenderedFile> {
    let entry = CATALOG
        .iter()
        .find(|e| e.path == path)
        .ok_or_else(|| NextPwaError::UnknownTemplate(path.to_string()))?;

    let renderer = TemplateRenderer::new();
    let data = json!({ "project_name": project_name });
    render_entry(entry, &renderer, &data)
}

fn render_entry(
    entry: &TemplateEntry,
    renderer: &TemplateRenderer,
    data: &serde_json::Value,
) -> Result<RenderedFile> {
    let content = if entry.templated {
        renderer.render(entry.body, data)?
    } else {
        entry.body.to_string()
    };
    Ok(RenderedFile {
        path: entry.path,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_paths_unique() {
        let unique: HashSet<_> = CATALOG.iter().map(|e| e.path).collect();
        assert_eq!(unique.len(), CATALOG.len());
    }

    #[test]
    fn test_templated_flags_match_bodies() {
        for entry in CATALOG {
            assert_eq!(
                entry.body.contains("{{project_name}}"),
                entry.templated,
                "flag mismatch for {}",
                entry.path
            );
        }
    }

    #[test]
    fn test_render_preserves_length_and_path_set() {
        let files = render("demo").unwrap();
        assert_eq!(files.len(), CATALOG.len());
        let rendered_paths: Vec<_> = files.iter().map(|f| f.path).collect();
        assert_eq!(rendered_paths, paths());
    }

    #[test]
    fn test_render_substitutes_every_occurrence() {
        for file in render("demo-project").unwrap() {
            assert!(
                !file.content.contains("{{project_name}}"),
                "unsubstituted placeholder in {}",
                file.path
            );
        }
    }

    #[test]
    fn test_render_default_name_in_manifests() {
        let files = render(DEFAULT_PROJECT_NAME).unwrap();
        let manifest = files.iter().find(|f| f.path == "public/manifest.json").unwrap();
        assert!(manifest.content.contains("\"name\": \"my-nextjs-app\""));
        assert!(manifest.content.contains("\"short_name\": \"my-nextjs-app\""));
        let package = files.iter().find(|f| f.path == "package.json").unwrap();
        assert!(package.content.contains("\"name\": \"my-nextjs-app\""));
    }

    #[test]
    fn test_render_empty_name_no_fallback() {
        let files = render("").unwrap();
        let manifest = files.iter().find(|f| f.path == "public/manifest.json").unwrap();
        assert!(manifest.content.contains("\"name\": \"\""));
    }

    #[test]
    fn test_render_is_idempotent() {
        assert_eq!(render("twice").unwrap(), render("twice").unwrap());
    }

    #[test]
    fn test_placeholder_syntax_in_name_passes_through() {
        let files = render("{{project_name}}").unwrap();
        let package = files.iter().find(|f| f.path == "package.json").unwrap();
        assert!(package.content.contains("\"name\": \"{{project_name}}\""));
    }

    #[test]
    fn test_filename_illegal_characters_not_corrected() {
        let files = render("my/app").unwrap();
        let package = files.iter().find(|f| f.path == "package.json").unwrap();
        assert!(package.content.contains("\"name\": \"my/app\""));
    }

    #[test]
    fn test_verbatim_entries_emitted_byte_for_byte() {
        let files = render("x").unwrap();
        let sw = files.iter().find(|f| f.path == "public/sw.js").unwrap();
        assert_eq!(sw.content, crate::templates::embedded::SERVICE_WORKER);
    }

    #[test]
    fn test_render_one_known_path() {
        let file = render_one("README.md", "solo").unwrap();
        assert!(file.content.contains("# solo"));
    }

    #[test]
    fn test_render_one_unknown_path() {
        let result = render_one("does/not/exist.js", "x");
        assert!(matches!(result, Err(NextPwaError::UnknownTemplate(_))));
    }
}
