use super::literal_list;
use crate::defaults;
use crate::error::Result;
use crate::options::{ListOption, Options, StyleOption};

const COLOR_BUTTON_BACK_STYLE: &str = "colorButton_backStyle";
const COLOR_BUTTON_FORE_STYLE: &str = "colorButton_foreStyle";
const COLOR_BUTTON_COLORS: &str = "colorButton_colors";
const COLOR_BUTTON_ENABLE_MORE: &str = "colorButton_enableMore";
const CONTENTS_CSS: &str = "contentsCss";
const SKIN: &str = "skin";
const STYLES_SET: &str = "stylesSet";
const TEMPLATES: &str = "templates";
const TEMPLATES_FILES: &str = "templates_files";
const TEMPLATES_REPLACE_CONTENT: &str = "templates_replaceContent";
const THEME: &str = "theme";

facet! {
    /// Look and feel: skin, theme, content CSS, color buttons and templates.
    StyleSheetFacet
}

impl StyleSheetFacet<'_> {
    pub fn color_button_back_style(&self) -> Result<Option<StyleOption>> {
        self.options.complex(COLOR_BUTTON_BACK_STYLE)
    }

    pub fn set_color_button_back_style(&mut self, style: StyleOption) -> &mut Self {
        self.options.put(COLOR_BUTTON_BACK_STYLE, style);
        self
    }

    pub fn color_button_fore_style(&self) -> Result<Option<StyleOption>> {
        self.options.complex(COLOR_BUTTON_FORE_STYLE)
    }

    pub fn set_color_button_fore_style(&mut self, style: StyleOption) -> &mut Self {
        self.options.put(COLOR_BUTTON_FORE_STYLE, style);
        self
    }

    /// Palette of the text and background color buttons, as hex codes
    /// without the leading `#`.
    pub fn color_button_colors(&self) -> Result<ListOption> {
        self.options
            .complex_or_else(COLOR_BUTTON_COLORS, defaults::color_palette)
    }

    pub fn set_color_button_colors(&mut self, colors: ListOption) -> &mut Self {
        self.options.put(COLOR_BUTTON_COLORS, colors);
        self
    }

    pub fn color_button_enable_more(&self) -> Result<bool> {
        self.options.boolean_or(COLOR_BUTTON_ENABLE_MORE, false)
    }

    pub fn set_color_button_enable_more(&mut self, enable: bool) -> &mut Self {
        self.options.put(COLOR_BUTTON_ENABLE_MORE, enable);
        self
    }

    pub fn contents_css(&self) -> Result<Vec<String>> {
        self.options
            .list_or_else(CONTENTS_CSS, || vec![defaults::CONTENTS_CSS.to_string()])
    }

    pub fn set_contents_css<I, S>(&mut self, files: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.put(CONTENTS_CSS, literal_list(files));
        self
    }

    /// `name` or `name,path` of the skin to load.
    pub fn skin(&self) -> Result<String> {
        self.options
            .literal_or(SKIN, "myskin,/customstuff/myskin/")
    }

    pub fn set_skin(&mut self, skin: impl Into<String>) -> &mut Self {
        self.options.put_literal(SKIN, skin);
        self
    }

    pub fn styles_set(&self) -> Result<String> {
        self.options.literal_or(STYLES_SET, "default")
    }

    pub fn set_styles_set(&mut self, set: impl Into<String>) -> &mut Self {
        self.options.put_literal(STYLES_SET, set);
        self
    }

    pub fn templates(&self) -> Result<String> {
        self.options.literal_or(TEMPLATES, "default")
    }

    pub fn set_templates(&mut self, templates: impl Into<String>) -> &mut Self {
        self.options.put_literal(TEMPLATES, templates);
        self
    }

    pub fn templates_files(&self) -> Result<Vec<String>> {
        self.options.list_or_else(TEMPLATES_FILES, || {
            vec![defaults::TEMPLATES_FILE.to_string()]
        })
    }

    pub fn set_templates_files<I, S>(&mut self, files: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.put(TEMPLATES_FILES, literal_list(files));
        self
    }

    pub fn templates_replace_content(&self) -> Result<bool> {
        self.options.boolean_or(TEMPLATES_REPLACE_CONTENT, true)
    }

    pub fn set_templates_replace_content(&mut self, replace: bool) -> &mut Self {
        self.options.put(TEMPLATES_REPLACE_CONTENT, replace);
        self
    }

    pub fn theme(&self) -> Result<String> {
        self.options.literal_or(THEME, "default")
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) -> &mut Self {
        self.options.put_literal(THEME, theme);
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
        let sheet = StyleSheetFacet::new(&mut options);
        assert_eq!(sheet.color_button_back_style().unwrap(), None);
        assert_eq!(sheet.color_button_fore_style().unwrap(), None);
        assert!(!sheet.color_button_enable_more().unwrap());
        assert_eq!(
            sheet.contents_css().unwrap(),
            vec!["<CKEditor folder>/contents.css"]
        );
        assert_eq!(sheet.skin().unwrap(), "myskin,/customstuff/myskin/");
        assert_eq!(sheet.styles_set().unwrap(), "default");
        assert_eq!(sheet.templates().unwrap(), "default");
        assert_eq!(
            sheet.templates_files().unwrap(),
            vec!["plugins/templates/templates/default.js"]
        );
        assert!(sheet.templates_replace_content().unwrap());
        assert_eq!(sheet.theme().unwrap(), "default");
    }

    #[test]
    fn palette_default() {
        let mut options = Options::new();
        let colors = StyleSheetFacet::new(&mut options)
            .color_button_colors()
            .unwrap();
        assert_eq!(colors.len(), 40);
        assert_eq!(colors.items()[0], "000");
        assert_eq!(colors.items()[16], "F00");
        assert_eq!(colors.items()[39], "FFF");
    }

    #[test]
    fn round_trip() {
        let fore = StyleOption::new(HtmlTag::Span).style("color", "#(color)");
        let mut options = Options::new();
        let mut sheet = StyleSheetFacet::new(&mut options);
        sheet
            .set_skin("kama")
            .set_theme("custom")
            .set_contents_css(["/css/site.css", "/css/editor.css"])
            .set_color_button_fore_style(fore.clone())
            .set_color_button_enable_more(true);
        assert_eq!(sheet.skin().unwrap(), "kama");
        assert_eq!(sheet.theme().unwrap(), "custom");
        assert_eq!(sheet.contents_css().unwrap().len(), 2);
        assert_eq!(sheet.color_button_fore_style().unwrap(), Some(fore));
        assert!(sheet.color_button_enable_more().unwrap());
        assert!(options
            .to_js()
            .contains("contentsCss: ['/css/site.css','/css/editor.css']"));
    }

    #[test]
    fn back_style_palette_and_templates_round_trip() {
        let back = StyleOption::new(HtmlTag::Span).style("background-color", "#(color)");
        let colors: ListOption = ["000", "FFF"].into_iter().collect();
        let mut options = Options::new();
        let mut sheet = StyleSheetFacet::new(&mut options);
        sheet
            .set_color_button_back_style(back.clone())
            .set_color_button_colors(colors.clone())
            .set_styles_set("site")
            .set_templates("site")
            .set_templates_files(["/js/templates.js"])
            .set_templates_replace_content(false);
        assert_eq!(sheet.color_button_back_style().unwrap(), Some(back.clone()));
        assert_eq!(sheet.color_button_colors().unwrap(), colors);
        assert_eq!(sheet.styles_set().unwrap(), "site");
        assert_eq!(sheet.templates().unwrap(), "site");
        assert_eq!(sheet.templates_files().unwrap(), vec!["/js/templates.js"]);
        assert!(!sheet.templates_replace_content().unwrap());
        assert_eq!(
            options.to_js(),
            format!(
                "{{colorButton_backStyle: {}, colorButton_colors: ['000','FFF'], \
                 stylesSet: 'site', templates: 'site', templates_files: ['/js/templates.js'], \
                 templates_replaceContent: false}}",
                back.to_js()
            )
        );
    }
}
