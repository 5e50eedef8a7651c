//! Style descriptors used by color buttons, font pickers and find highlight.

use super::{HtmlTag, ToJs};
use crate::error::Result;
use crate::js;
use indexmap::IndexMap;

/// An element with inline CSS, plus CSS properties it overrides.
///
/// Renders as `{element: 'span', style: {'color': '#(color)'}, overrides: [{'color': null}]}`
/// with empty sections left out. Overrides are wrapped in a one-element array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOption {
    element: HtmlTag,
    style: IndexMap<String, String>,
    overrides: IndexMap<String, String>,
}

impl StyleOption {
    pub fn new(element: HtmlTag) -> Self {
        Self {
            element,
            style: IndexMap::new(),
            overrides: IndexMap::new(),
        }
    }

    /// Build from an element name, failing on names that are not HTML tags.
    pub fn for_tag(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn override_property(
        mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.overrides.insert(property.into(), value.into());
        self
    }

    pub fn element(&self) -> HtmlTag {
        self.element
    }

    pub fn styles(&self) -> &IndexMap<String, String> {
        &self.style
    }

    pub fn overrides(&self) -> &IndexMap<String, String> {
        &self.overrides
    }
}

impl ToJs for StyleOption {
    fn to_js(&self) -> String {
        let mut buffer = format!("{{element: {}", js::quotes(self.element.as_str()));
        if !self.style.is_empty() {
            buffer.push_str(", style: ");
            buffer.push_str(&js::string_map(&self.style));
        }
        if !self.overrides.is_empty() {
            buffer.push_str(", overrides: [");
            buffer.push_str(&js::string_map(&self.overrides));
            buffer.push(']');
        }
        buffer.push('}');
        buffer
    }
}
