//! Handlebars-based renderer for project-name substitution.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** on and HTML
//! escaping off. Strict mode ensures that any `{{variable}}` referenced in a
//! template must be present in the data context, so a typo in a template fails
//! loudly at scaffold time instead of emitting a file with a hole in it.
//! Escaping is disabled because the templates produce JSON, JavaScript, and
//! Markdown — the default HTML escaping would mangle quotes and ampersands in
//! the substituted project name.

use handlebars::{no_escape, Handlebars};
use serde_json::Value;

use crate::error::{NextPwaError, Result};

/// Template renderer used for catalog entries carrying a placeholder.
///
/// Substitution is verbatim: whatever string is in the data context lands in
/// the output unmodified, including empty strings and strings that themselves
/// look like placeholder syntax (values are never re-expanded).
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| NextPwaError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_substitution_is_verbatim() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("name: {{project_name}}", &json!({ "project_name": "a & 'b' <c>" }))
            .unwrap();
        assert_eq!(out, "name: a & 'b' <c>");
    }

    #[test]
    fn test_value_is_not_re_expanded() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("{{project_name}}", &json!({ "project_name": "{{project_name}}" }))
            .unwrap();
        assert_eq!(out, "{{project_name}}");
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render("{{not_provided}}", &json!({ "project_name": "x" }));
        assert!(matches!(result, Err(NextPwaError::TemplateRender(_))));
    }

    #[test]
    fn test_empty_name_renders_empty() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("\"name\": \"{{project_name}}\"", &json!({ "project_name": "" }))
            .unwrap();
        assert_eq!(out, "\"name\": \"\"");
    }
}
