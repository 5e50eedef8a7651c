use crate::error::Result;
use crate::options::Options;

const FORCE_PASTE_AS_PLAIN_TEXT: &str = "forcePasteAsPlainText";
const PASTE_FROM_WORD_CLEANUP_FILE: &str = "pasteFromWordCleanupFile";
const PASTE_FROM_WORD_PROMPT_CLEANUP: &str = "pasteFromWordPromptCleanup";
const PASTE_FROM_WORD_REMOVE_FONT_STYLES: &str = "pasteFromWordRemoveFontStyles";
const PASTE_FROM_WORD_REMOVE_STYLES: &str = "pasteFromWordRemoveStyles";

facet! {
    /// Clipboard handling, including the "paste from Word" cleanup.
    PasteFacet
}

impl PasteFacet<'_> {
    pub fn force_paste_as_plain_text(&self) -> Result<bool> {
        self.options.boolean_or(FORCE_PASTE_AS_PLAIN_TEXT, false)
    }

    pub fn set_force_paste_as_plain_text(&mut self, force: bool) -> &mut Self {
        self.options.put(FORCE_PASTE_AS_PLAIN_TEXT, force);
        self
    }

    pub fn cleanup_file(&self) -> Result<String> {
        self.options
            .literal_or(PASTE_FROM_WORD_CLEANUP_FILE, "default")
    }

    pub fn set_cleanup_file(&mut self, file: impl Into<String>) -> &mut Self {
        self.options.put_literal(PASTE_FROM_WORD_CLEANUP_FILE, file);
        self
    }

    pub fn prompt_cleanup(&self) -> Result<bool> {
        self.options.boolean_or(PASTE_FROM_WORD_PROMPT_CLEANUP, true)
    }

    pub fn set_prompt_cleanup(&mut self, prompt: bool) -> &mut Self {
        self.options.put(PASTE_FROM_WORD_PROMPT_CLEANUP, prompt);
        self
    }

    pub fn remove_font_styles(&self) -> Result<bool> {
        self.options
            .boolean_or(PASTE_FROM_WORD_REMOVE_FONT_STYLES, true)
    }

    pub fn set_remove_font_styles(&mut self, remove: bool) -> &mut Self {
        self.options.put(PASTE_FROM_WORD_REMOVE_FONT_STYLES, remove);
        self
    }

    pub fn remove_styles(&self) -> Result<bool> {
        self.options.boolean_or(PASTE_FROM_WORD_REMOVE_STYLES, true)
    }

    pub fn set_remove_styles(&mut self, remove: bool) -> &mut Self {
        self.options.put(PASTE_FROM_WORD_REMOVE_STYLES, remove);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let mut options = Options::new();
        let paste = PasteFacet::new(&mut options);
        assert!(!paste.force_paste_as_plain_text().unwrap());
        assert_eq!(paste.cleanup_file().unwrap(), "default");
        assert!(paste.prompt_cleanup().unwrap());
        assert!(paste.remove_font_styles().unwrap());
        assert!(paste.remove_styles().unwrap());
    }

    #[test]
    fn round_trip() {
        let mut options = Options::new();
        let mut paste = PasteFacet::new(&mut options);
        paste
            .set_force_paste_as_plain_text(true)
            .set_cleanup_file("/js/cleanup.js")
            .set_prompt_cleanup(false)
            .set_remove_font_styles(false)
            .set_remove_styles(false);
        assert!(paste.force_paste_as_plain_text().unwrap());
        assert_eq!(paste.cleanup_file().unwrap(), "/js/cleanup.js");
        assert!(!paste.prompt_cleanup().unwrap());
        assert!(!paste.remove_font_styles().unwrap());
        assert!(!paste.remove_styles().unwrap());
    }
}
