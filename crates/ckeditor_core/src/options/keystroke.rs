//! Key combinations, optionally bound to an editor command.

use super::ToJs;
use crate::js;
use std::collections::BTreeSet;

/// Modifier key. Ordering follows declaration order and fixes the order in
/// which masks are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyStrokeMask {
    Alt,
    Ctrl,
    Shift,
}

impl KeyStrokeMask {
    /// Client-side constant for the modifier.
    pub fn token(self) -> &'static str {
        match self {
            KeyStrokeMask::Alt => "CKEDITOR.ALT",
            KeyStrokeMask::Ctrl => "CKEDITOR.CTRL",
            KeyStrokeMask::Shift => "CKEDITOR.SHIFT",
        }
    }
}

/// A key code combined with a deduplicated set of modifiers.
///
/// Renders as `CKEDITOR.CTRL + CKEDITOR.SHIFT + 121`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyStrokeOption {
    key_code: u32,
    masks: BTreeSet<KeyStrokeMask>,
}

impl KeyStrokeOption {
    pub fn new(key_code: u32, masks: &[KeyStrokeMask]) -> Self {
        Self {
            key_code,
            masks: masks.iter().copied().collect(),
        }
    }

    pub fn key_code(&self) -> u32 {
        self.key_code
    }

    pub fn masks(&self) -> &BTreeSet<KeyStrokeMask> {
        &self.masks
    }

    pub fn set_key_code(&mut self, key_code: u32) {
        self.key_code = key_code;
    }

    pub fn set_masks(&mut self, masks: &[KeyStrokeMask]) {
        self.masks = masks.iter().copied().collect();
    }
}

impl ToJs for KeyStrokeOption {
    fn to_js(&self) -> String {
        let mut buffer = String::new();
        for mask in &self.masks {
            buffer.push_str(mask.token());
            buffer.push_str(" + ");
        }
        buffer.push_str(&self.key_code.to_string());
        buffer
    }
}

/// A keystroke bound to a named editor command: `[CKEDITOR.CTRL + 90, 'undo']`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandKeyStrokeOption {
    command: String,
    keystroke: KeyStrokeOption,
}

impl CommandKeyStrokeOption {
    pub fn new(command: impl Into<String>, key_code: u32, masks: &[KeyStrokeMask]) -> Self {
        Self {
            command: command.into(),
            keystroke: KeyStrokeOption::new(key_code, masks),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn keystroke(&self) -> &KeyStrokeOption {
        &self.keystroke
    }

    pub fn set_command(&mut self, command: impl Into<String>) {
        self.command = command.into();
    }
}

impl ToJs for CommandKeyStrokeOption {
    fn to_js(&self) -> String {
        format!("[{}, {}]", self.keystroke.to_js(), js::quotes(&self.command))
    }
}

#[cfg(test)]
mod tests {
    use super::KeyStrokeMask::*;
    use super::*;

    #[test]
    fn single_mask_renders_once() {
        let stroke = KeyStrokeOption::new(66, &[Ctrl]);
        assert_eq!(stroke.to_js(), "CKEDITOR.CTRL + 66");
    }

    #[test]
    fn repeated_masks_are_deduplicated() {
        let stroke = KeyStrokeOption::new(66, &[Ctrl, Ctrl, Ctrl]);
        assert_eq!(stroke.masks().len(), 1);
        assert_eq!(stroke.to_js().matches("CKEDITOR.CTRL").count(), 1);
    }

    #[test]
    fn masks_render_in_declaration_order() {
        let stroke = KeyStrokeOption::new(121, &[Shift, Alt, Ctrl]);
        assert_eq!(
            stroke.to_js(),
            "CKEDITOR.ALT + CKEDITOR.CTRL + CKEDITOR.SHIFT + 121"
        );
    }

    #[test]
    fn no_masks_is_just_the_key_code() {
        assert_eq!(KeyStrokeOption::new(13, &[]).to_js(), "13");
    }

    #[test]
    fn command_keystroke_wraps_in_array() {
        let stroke = CommandKeyStrokeOption::new("redo", 121, &[Shift, Ctrl]);
        assert_eq!(
            stroke.to_js(),
            "[CKEDITOR.CTRL + CKEDITOR.SHIFT + 121, 'redo']"
        );
    }

    #[test]
    fn mutators_replace_key_masks_and_command() {
        let mut stroke = CommandKeyStrokeOption::new("bold", 66, &[Ctrl]);
        stroke.set_command("italic");
        assert_eq!(stroke.to_js(), "[CKEDITOR.CTRL + 66, 'italic']");

        let mut plain = KeyStrokeOption::new(66, &[Ctrl]);
        plain.set_key_code(73);
        plain.set_masks(&[Alt, Alt]);
        assert_eq!(plain.key_code(), 73);
        assert_eq!(plain.to_js(), "CKEDITOR.ALT + 73");
    }
}
