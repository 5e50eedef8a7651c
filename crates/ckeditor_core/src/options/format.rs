//! Block and inline format descriptors (`format_p`, `coreStyles_bold`, ...).

use super::{HtmlTag, ToJs};
use crate::error::Result;
use crate::js;
use indexmap::IndexMap;

/// Describes the element (plus attributes) the editor applies for a format.
///
/// Renders as `{element: 'span', attributes: {'class': 'bold'}, overrides: 'b'}`.
/// The `attributes` and `overrides` sections are left out when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOption {
    element: HtmlTag,
    attributes: IndexMap<String, String>,
    overrides: Option<String>,
}

impl FormatOption {
    pub fn new(element: HtmlTag) -> Self {
        Self {
            element,
            attributes: IndexMap::new(),
            overrides: None,
        }
    }

    /// Build from an element name, failing on names that are not HTML tags.
    pub fn for_tag(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    /// Add an attribute; attributes keep insertion order.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn overrides(mut self, overrides: impl Into<String>) -> Self {
        self.overrides = Some(overrides.into());
        self
    }

    pub fn element(&self) -> HtmlTag {
        self.element
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn overrides_tag(&self) -> Option<&str> {
        self.overrides.as_deref()
    }
}

impl ToJs for FormatOption {
    fn to_js(&self) -> String {
        let mut buffer = format!("{{element: {}", js::quotes(self.element.as_str()));
        if !self.attributes.is_empty() {
            buffer.push_str(", attributes: ");
            buffer.push_str(&js::string_map(&self.attributes));
        }
        if let Some(overrides) = &self.overrides {
            buffer.push_str(", overrides: ");
            buffer.push_str(&js::quotes(overrides));
        }
        buffer.push('}');
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_format_only_names_the_element() {
        assert_eq!(FormatOption::new(HtmlTag::P).to_js(), "{element: 'p'}");
    }

    #[test]
    fn empty_attributes_section_is_omitted() {
        let rendered = FormatOption::new(HtmlTag::Div).to_js();
        assert!(!rendered.contains("attributes"));
    }

    #[test]
    fn attributes_and_overrides_are_rendered_in_order() {
        let format = FormatOption::new(HtmlTag::Span)
            .attribute("class", "bold")
            .attribute("data-kind", "strong")
            .overrides("b");
        assert_eq!(
            format.to_js(),
            "{element: 'span', attributes: {'class': 'bold', 'data-kind': 'strong'}, overrides: 'b'}"
        );
    }

    #[test]
    fn unknown_element_name_fails_construction() {
        assert!(FormatOption::for_tag("marquee").is_err());
        assert_eq!(FormatOption::for_tag("pre").unwrap().element(), HtmlTag::Pre);
    }
}
