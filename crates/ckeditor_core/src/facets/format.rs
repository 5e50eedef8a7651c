use crate::defaults;
use crate::error::Result;
use crate::options::{FormatOption, ListOption, Options};

const FORMAT_TAGS: &str = "format_tags";
const REMOVE_FORMAT_TAGS: &str = "removeFormatTags";

facet! {
    /// Core text styles, the paragraph format combo and "remove format".
    ///
    /// Every style descriptor has no default: the getter returns `None`
    /// and the client editor falls back to its own definition.
    FormatFacet
}

macro_rules! format_descriptors {
    ($($getter:ident, $setter:ident => $name:literal;)+) => {
        impl FormatFacet<'_> {
            $(
                pub fn $getter(&self) -> Result<Option<FormatOption>> {
                    self.options.complex($name)
                }

                pub fn $setter(&mut self, format: FormatOption) -> &mut Self {
                    self.options.put($name, format);
                    self
                }
            )+
        }
    };
}

format_descriptors! {
    core_styles_bold, set_core_styles_bold => "coreStyles_bold";
    core_styles_italic, set_core_styles_italic => "coreStyles_italic";
    core_styles_strike, set_core_styles_strike => "coreStyles_strike";
    core_styles_subscript, set_core_styles_subscript => "coreStyles_subscript";
    core_styles_superscript, set_core_styles_superscript => "coreStyles_superscript";
    core_styles_underline, set_core_styles_underline => "coreStyles_underline";
    format_address, set_format_address => "format_address";
    format_div, set_format_div => "format_div";
    format_h1, set_format_h1 => "format_h1";
    format_h2, set_format_h2 => "format_h2";
    format_h3, set_format_h3 => "format_h3";
    format_h4, set_format_h4 => "format_h4";
    format_h5, set_format_h5 => "format_h5";
    format_h6, set_format_h6 => "format_h6";
    format_p, set_format_p => "format_p";
    format_pre, set_format_pre => "format_pre";
}

impl FormatFacet<'_> {
    /// Entries of the format combo, separated by semicolons.
    pub fn format_tags(&self) -> Result<String> {
        self.options
            .literal_or(FORMAT_TAGS, "p;h1;h2;h3;h4;h5;h6;pre;address;div")
    }

    pub fn set_format_tags(&mut self, tags: impl Into<String>) -> &mut Self {
        self.options.put_literal(FORMAT_TAGS, tags);
        self
    }

    /// Elements stripped by the "remove format" command.
    pub fn remove_format_tags(&self) -> Result<ListOption> {
        self.options
            .complex_or_else(REMOVE_FORMAT_TAGS, defaults::remove_format_tags)
    }

    pub fn set_remove_format_tags(&mut self, tags: ListOption) -> &mut Self {
        self.options.put(REMOVE_FORMAT_TAGS, tags);
        self
    }
}
