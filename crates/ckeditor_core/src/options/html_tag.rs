//! HTML element names accepted by format and style descriptors.

use crate::error::EditorError;
use std::fmt;
use std::str::FromStr;

macro_rules! html_tags {
    ($($variant:ident => $name:literal,)+) => {
        /// An HTML 4 element name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HtmlTag {
            $($variant,)+
        }

        impl HtmlTag {
            /// Every known tag, in alphabetical order.
            pub const ALL: &'static [HtmlTag] = &[$(HtmlTag::$variant,)+];

            /// Lower-case element name as written in markup.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(HtmlTag::$variant => $name,)+
                }
            }
        }
    };
}

html_tags! {
    A => "a",
    Abbr => "abbr",
    Acronym => "acronym",
    Address => "address",
    Applet => "applet",
    Area => "area",
    B => "b",
    Base => "base",
    Basefont => "basefont",
    Bdo => "bdo",
    Big => "big",
    Blockquote => "blockquote",
    Body => "body",
    Br => "br",
    Button => "button",
    Caption => "caption",
    Center => "center",
    Cite => "cite",
    Code => "code",
    Col => "col",
    Colgroup => "colgroup",
    Dd => "dd",
    Del => "del",
    Dfn => "dfn",
    Dir => "dir",
    Div => "div",
    Dl => "dl",
    Dt => "dt",
    Em => "em",
    Fieldset => "fieldset",
    Font => "font",
    Form => "form",
    Frame => "frame",
    Frameset => "frameset",
    H1 => "h1",
    H2 => "h2",
    H3 => "h3",
    H4 => "h4",
    H5 => "h5",
    H6 => "h6",
    Head => "head",
    Hr => "hr",
    Html => "html",
    I => "i",
    Iframe => "iframe",
    Img => "img",
    Input => "input",
    Ins => "ins",
    Isindex => "isindex",
    Kbd => "kbd",
    Label => "label",
    Legend => "legend",
    Li => "li",
    Link => "link",
    Map => "map",
    Menu => "menu",
    Meta => "meta",
    Noframes => "noframes",
    Noscript => "noscript",
    Object => "object",
    Ol => "ol",
    Optgroup => "optgroup",
    Option => "option",
    P => "p",
    Param => "param",
    Pre => "pre",
    Q => "q",
    S => "s",
    Samp => "samp",
    Script => "script",
    Select => "select",
    Small => "small",
    Span => "span",
    Strike => "strike",
    Strong => "strong",
    Style => "style",
    Sub => "sub",
    Sup => "sup",
    Table => "table",
    Tbody => "tbody",
    Td => "td",
    Textarea => "textarea",
    Tfoot => "tfoot",
    Th => "th",
    Thead => "thead",
    Title => "title",
    Tr => "tr",
    Tt => "tt",
    U => "u",
    Ul => "ul",
    Var => "var",
    Xmp => "xmp",
}

impl fmt::Display for HtmlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HtmlTag {
    type Err = EditorError;

    /// Case-insensitive lookup by element name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        HtmlTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EditorError::UnknownTag(s.to_string()))
    }
}
