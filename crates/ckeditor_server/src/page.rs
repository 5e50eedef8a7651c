//! Host page: the element the editor binds to and the scripts it loads.

use ckeditor_core::{Component, JavaScriptResource, ResourceRegistry};

/// Element the editor is attached to, described by its tag and id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    pub tag: String,
    pub id: String,
}

impl PageElement {
    pub fn textarea(id: impl Into<String>) -> Self {
        Self {
            tag: "textarea".to_string(),
            id: id.into(),
        }
    }
}

impl Component for PageElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn markup_id(&self) -> &str {
        &self.id
    }
}

/// Script tags for a page, in the order they were declared.
#[derive(Debug, Clone)]
pub struct ScriptRegistry {
    base_path: String,
    scripts: Vec<JavaScriptResource>,
}

impl ScriptRegistry {
    /// `base_path` is prefixed to every resource name and must end in `/`.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            scripts: Vec::new(),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.scripts
            .iter()
            .map(|script| format!("{}{}", self.base_path, script.name()))
            .collect()
    }
}

impl ResourceRegistry for ScriptRegistry {
    fn add_javascript(&mut self, resource: JavaScriptResource) {
        self.scripts.add_javascript(resource);
    }
}

/// Escape text for an HTML attribute or text node.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build the demo page around an already rendered init statement.
pub fn render_page(element: &PageElement, script_urls: &[String], statement: &str) -> String {
    let scripts: String = script_urls
        .iter()
        .map(|url| format!("    <script src=\"{}\"></script>\n", escape_html(url)))
        .collect();
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n    <title>CKEditor</title>\n{scripts}</head>\n<body>\n    <form method=\"post\">\n        <textarea id=\"{id}\" name=\"{id}\"></textarea>\n    </form>\n    <script>\n        $(function() {{ {statement} }});\n    </script>\n</body>\n</html>\n",
        scripts = scripts,
        id = escape_html(&element.id),
        statement = statement,
    )
}
