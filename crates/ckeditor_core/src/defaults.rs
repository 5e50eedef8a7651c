//! Fallback values for options whose default is more than a scalar.
//!
//! Facet getters fall back to these when the store has no entry; nothing
//! here is written into the store.

use crate::options::{CommandKeyStrokeOption, KeyStrokeMask, KeyStrokeOption, ListOption};

/// Default `docType`: XHTML 1.0 Transitional.
pub const DOC_TYPE: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">";

pub const CUSTOM_CONFIG: &str = "<CKEditor folder>/config.js";

pub const CONTENTS_CSS: &str = "<CKEditor folder>/contents.css";

pub const TEMPLATES_FILE: &str = "plugins/templates/templates/default.js";

pub const FONT_SIZES: &str = "8/8px;9/9px;10/10px;11/11px;12/12px;14/14px;16/16px;18/18px;20/20px;22/22px;24/24px;26/26px;28/28px;36/36px;48/48px;72/72px";

pub const MENU_GROUPS: &str = "clipboard,form,tablecell,tablecellproperties,tablerow,tablecolumn,table,anchor,link,image,flash,checkbox,radio,textfield,hiddenfield,imagebutton,button,select,textarea";

const COLOR_PALETTE: [&str; 40] = [
    "000", "800000", "8B4513", "2F4F4F", "008080", "000080", "4B0082", "696969", "B22222",
    "A52A2A", "DAA520", "006400", "40E0D0", "0000CD", "800080", "808080", "F00", "FF8C00",
    "FFD700", "008000", "0FF", "00F", "EE82EE", "A9A9A9", "FFA07A", "FFA500", "FFFF00",
    "00FF00", "AFEEEE", "ADD8E6", "DDA0DD", "D3D3D3", "FFF0F5", "FAEBD7", "FFFFE0", "F0FFF0",
    "F0FFFF", "F0F8FF", "E6E6FA", "FFF",
];

const REMOVE_FORMAT_TAGS: [&str; 21] = [
    "b", "big", "code", "del", "dfn", "em", "font", "i", "ins", "kbd", "q", "samp", "small",
    "span", "strike", "strong", "sub", "sup", "tt", "u", "va",
];

const REMOVE_PLUGINS: [&str; 3] = ["elementspath", "save", "font"];

// Paired by index with SMILEY_DESCRIPTIONS.
const SMILEY_IMAGES: [&str; 21] = [
    "regular_smile.gif",
    "sad_smile.gif",
    "wink_smile.gif",
    "teeth_smile.gif",
    "confused_smile.gif",
    "tounge_smile.gif",
    "embaressed_smile.gif",
    "omg_smile.gif",
    "whatchutalkingabout_smile.gif",
    "angry_smile.gif",
    "angel_smile.gif",
    "shades_smile.gif",
    "devil_smile.gif",
    "cry_smile.gif",
    "lightbulb.gif",
    "thumbs_down.gif",
    "thumbs_up.gif",
    "heart.gif",
    "broken_heart.gif",
    "kiss.gif",
    "envelope.gif",
];

const SMILEY_DESCRIPTIONS: [&str; 21] = [
    "smiley",
    "sad",
    "wink",
    "laugh",
    "frown",
    "cheeky",
    "blush",
    "surprise",
    "indecision",
    "angry",
    "angle",
    "cool",
    "devil",
    "crying",
    "enlightened",
    "no",
    "yes",
    "heart",
    "broken heart",
    "kiss",
    "mail",
];

pub fn color_palette() -> ListOption {
    COLOR_PALETTE.into_iter().collect()
}

pub fn remove_format_tags() -> ListOption {
    REMOVE_FORMAT_TAGS.into_iter().collect()
}

pub fn remove_plugins() -> ListOption {
    REMOVE_PLUGINS.into_iter().collect()
}

pub fn smiley_images() -> Vec<String> {
    SMILEY_IMAGES.iter().map(|s| s.to_string()).collect()
}

pub fn smiley_descriptions() -> Vec<String> {
    SMILEY_DESCRIPTIONS.iter().map(|s| s.to_string()).collect()
}

/// Ctrl+B, Ctrl+I and Ctrl+U are swallowed by the editor.
pub fn blocked_keystrokes() -> Vec<KeyStrokeOption> {
    [66, 73, 85]
        .into_iter()
        .map(|code| KeyStrokeOption::new(code, &[KeyStrokeMask::Ctrl]))
        .collect()
}

pub fn keystrokes() -> Vec<CommandKeyStrokeOption> {
    use KeyStrokeMask::{Alt, Ctrl, Shift};
    vec![
        CommandKeyStrokeOption::new("toolbarFocus", 121, &[Alt]),
        CommandKeyStrokeOption::new("elementsPathFocus", 122, &[Alt]),
        CommandKeyStrokeOption::new("contextMenu", 121, &[Shift]),
        CommandKeyStrokeOption::new("undo", 90, &[Ctrl]),
        CommandKeyStrokeOption::new("redo", 89, &[Ctrl]),
        CommandKeyStrokeOption::new("redo", 121, &[Ctrl, Shift]),
        CommandKeyStrokeOption::new("link", 76, &[Ctrl]),
        CommandKeyStrokeOption::new("bold", 66, &[Ctrl]),
        CommandKeyStrokeOption::new("italic", 73, &[Ctrl]),
        CommandKeyStrokeOption::new("underline", 85, &[Ctrl]),
        CommandKeyStrokeOption::new("toolbarCollapse", 109, &[Alt]),
    ]
}
