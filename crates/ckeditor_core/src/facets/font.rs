use crate::defaults;
use crate::error::Result;
use crate::options::{Options, StyleOption};

const FONT_DEFAULT_LABEL: &str = "font_defaultLabel";
const FONT_NAMES: &str = "font_names";
const FONT_STYLE: &str = "font_style";
const FONT_SIZE_DEFAULT_LABEL: &str = "fontSize_defaultLabel";
const FONT_SIZE_SIZES: &str = "fontSize_sizes";
const FONT_SIZE_STYLE: &str = "fontSize_style";

facet! {
    /// Font family and font size combos.
    FontFacet
}

impl FontFacet<'_> {
    pub fn default_label(&self) -> Result<String> {
        self.options.literal_or(FONT_DEFAULT_LABEL, "Arial")
    }

    pub fn set_default_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.options.put_literal(FONT_DEFAULT_LABEL, label);
        self
    }

    /// Semicolon separated font names, `Display/family list` per entry.
    pub fn names(&self) -> Result<String> {
        self.options
            .literal_or(FONT_NAMES, "Arial;Times New Roman;Verdana")
    }

    pub fn set_names(&mut self, names: impl Into<String>) -> &mut Self {
        self.options.put_literal(FONT_NAMES, names);
        self
    }

    pub fn style(&self) -> Result<Option<StyleOption>> {
        self.options.complex(FONT_STYLE)
    }

    pub fn set_style(&mut self, style: StyleOption) -> &mut Self {
        self.options.put(FONT_STYLE, style);
        self
    }

    pub fn size_default_label(&self) -> Result<String> {
        self.options.literal_or(FONT_SIZE_DEFAULT_LABEL, "12px")
    }

    pub fn set_size_default_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.options.put_literal(FONT_SIZE_DEFAULT_LABEL, label);
        self
    }

    pub fn sizes(&self) -> Result<String> {
        self.options.literal_or(FONT_SIZE_SIZES, defaults::FONT_SIZES)
    }

    pub fn set_sizes(&mut self, sizes: impl Into<String>) -> &mut Self {
        self.options.put_literal(FONT_SIZE_SIZES, sizes);
        self
    }

    pub fn size_style(&self) -> Result<Option<StyleOption>> {
        self.options.complex(FONT_SIZE_STYLE)
    }

    pub fn set_size_style(&mut self, style: StyleOption) -> &mut Self {
        self.options.put(FONT_SIZE_STYLE, style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{HtmlTag, ToJs};

    #[test]
    fn defaults() {
        let mut options = Options::new();
        let font = FontFacet::new(&mut options);
        assert_eq!(font.default_label().unwrap(), "Arial");
        assert_eq!(font.names().unwrap(), "Arial;Times New Roman;Verdana");
        assert_eq!(font.style().unwrap(), None);
        assert_eq!(font.size_default_label().unwrap(), "12px");
        assert!(font.sizes().unwrap().starts_with("8/8px;9/9px;"));
        assert!(font.sizes().unwrap().ends_with(";48/48px;72/72px"));
        assert_eq!(font.size_style().unwrap(), None);
    }

    #[test]
    fn style_round_trip() {
        let style = StyleOption::new(HtmlTag::Span)
            .style("font-family", "#(family)")
            .override_property("element", "font");
        let mut options = Options::new();
        let mut font = FontFacet::new(&mut options);
        font.set_style(style.clone()).set_names("Courier");
        assert_eq!(font.style().unwrap(), Some(style.clone()));
        assert_eq!(font.names().unwrap(), "Courier");
        assert_eq!(
            options.to_js(),
            format!("{{font_style: {}, font_names: 'Courier'}}", style.to_js())
        );
    }

    #[test]
    fn labels_and_sizes_round_trip() {
        let size_style = StyleOption::new(HtmlTag::Span).style("font-size", "#(size)");
        let mut options = Options::new();
        let mut font = FontFacet::new(&mut options);
        font.set_default_label("Verdana")
            .set_size_default_label("14px")
            .set_sizes("Small/10px;Large/24px")
            .set_size_style(size_style.clone());
        assert_eq!(font.default_label().unwrap(), "Verdana");
        assert_eq!(font.size_default_label().unwrap(), "14px");
        assert_eq!(font.sizes().unwrap(), "Small/10px;Large/24px");
        assert_eq!(font.size_style().unwrap(), Some(size_style.clone()));
        assert_eq!(
            options.to_js(),
            format!(
                "{{font_defaultLabel: 'Verdana', fontSize_defaultLabel: '14px', \
                 fontSize_sizes: 'Small/10px;Large/24px', fontSize_style: {}}}",
                size_style.to_js()
            )
        );
    }
}
