//! Enumerated options with fixed client-side tokens.

use super::ToJs;
use crate::error::EditorError;
use crate::js;
use std::str::FromStr;

/// Element produced when Enter (or Shift+Enter) is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnterMode {
    Br,
    Div,
    P,
}

impl EnterMode {
    /// Client-side constant, emitted unquoted.
    pub fn token(self) -> &'static str {
        match self {
            EnterMode::Br => "CKEDITOR.ENTER_BR",
            EnterMode::Div => "CKEDITOR.ENTER_DIV",
            EnterMode::P => "CKEDITOR.ENTER_P",
        }
    }
}

impl ToJs for EnterMode {
    fn to_js(&self) -> String {
        self.token().to_string()
    }
}

impl FromStr for EnterMode {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "br" => Ok(EnterMode::Br),
            "div" => Ok(EnterMode::Div),
            "p" => Ok(EnterMode::P),
            _ => Err(EditorError::InvalidValue(format!("unknown enter mode '{}'", s))),
        }
    }
}

/// Editing mode the editor opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartupMode {
    Source,
    Wysiwyg,
}

impl StartupMode {
    pub fn as_str(self) -> &'static str {
        match self {
            StartupMode::Source => "source",
            StartupMode::Wysiwyg => "wysiwyg",
        }
    }
}

impl ToJs for StartupMode {
    fn to_js(&self) -> String {
        js::quotes(self.as_str())
    }
}

impl FromStr for StartupMode {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "source" => Ok(StartupMode::Source),
            "wysiwyg" => Ok(StartupMode::Wysiwyg),
            _ => Err(EditorError::InvalidValue(format!("unknown startup mode '{}'", s))),
        }
    }
}

/// Where the toolbar is drawn relative to the editing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarLocation {
    Bottom,
    Top,
}

impl ToolbarLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolbarLocation::Bottom => "bottom",
            ToolbarLocation::Top => "top",
        }
    }
}

impl ToJs for ToolbarLocation {
    fn to_js(&self) -> String {
        js::quotes(self.as_str())
    }
}

impl FromStr for ToolbarLocation {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bottom" => Ok(ToolbarLocation::Bottom),
            "top" => Ok(ToolbarLocation::Top),
            _ => Err(EditorError::InvalidValue(format!(
                "unknown toolbar location '{}'",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_mode_is_an_unquoted_constant() {
        assert_eq!(EnterMode::P.to_js(), "CKEDITOR.ENTER_P");
        assert_eq!(EnterMode::Br.to_js(), "CKEDITOR.ENTER_BR");
    }

    #[test]
    fn string_modes_are_quoted() {
        assert_eq!(StartupMode::Wysiwyg.to_js(), "'wysiwyg'");
        assert_eq!(ToolbarLocation::Bottom.to_js(), "'bottom'");
    }

    #[test]
    fn modes_parse_case_insensitively() {
        assert_eq!("DIV".parse::<EnterMode>().unwrap(), EnterMode::Div);
        assert_eq!("Source".parse::<StartupMode>().unwrap(), StartupMode::Source);
        assert_eq!("top".parse::<ToolbarLocation>().unwrap(), ToolbarLocation::Top);
        assert!("left".parse::<ToolbarLocation>().is_err());
    }
}
