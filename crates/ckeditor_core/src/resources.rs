//! Seams between the behavior and whatever page it is attached to.

/// A script the host page must load before the editor initializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JavaScriptResource {
    name: &'static str,
}

impl JavaScriptResource {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// File name, relative to the editor's base path.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// The editor itself.
pub const CKEDITOR_JS: JavaScriptResource = JavaScriptResource::new("ckeditor.js");

/// jQuery adapter providing `$.fn.ckeditor` and `$.fn.ckeditorGet`.
pub const JQUERY_ADAPTER_JS: JavaScriptResource =
    JavaScriptResource::new("jquery-ckeditor-adapter.js");

/// Collects the scripts a page needs. Implementations should ignore
/// resources they have already seen.
pub trait ResourceRegistry {
    fn add_javascript(&mut self, resource: JavaScriptResource);
}

impl ResourceRegistry for Vec<JavaScriptResource> {
    fn add_javascript(&mut self, resource: JavaScriptResource) {
        if !self.contains(&resource) {
            self.push(resource);
        }
    }
}

/// The page element a behavior is attached to.
pub trait Component {
    /// Tag name as written in the markup, e.g. `textarea`.
    fn tag_name(&self) -> &str;

    /// Value of the element's `id` attribute.
    fn markup_id(&self) -> &str;
}
