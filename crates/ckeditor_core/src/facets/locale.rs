use crate::error::Result;
use crate::options::Options;

const CONTENTS_LANG_DIRECTION: &str = "contentsLangDirection";
const DEFAULT_LANGUAGE: &str = "defaultLanguage";
const LANGUAGE: &str = "language";
const DISABLE_NATIVE_SPELL_CHECKER: &str = "disableNativeSpellChecker";
const ENTITIES_GREEK: &str = "entities_greek";
const ENTITIES_LATIN: &str = "entities_latin";
const ENTITIES_PROCESS_NUMERICAL: &str = "entities_processNumerical";

facet! {
    /// Language, text direction and entity encoding.
    LocaleFacet
}

impl LocaleFacet<'_> {
    /// `ltr` or `rtl`.
    pub fn contents_lang_direction(&self) -> Result<String> {
        self.options.literal_or(CONTENTS_LANG_DIRECTION, "ltr")
    }

    pub fn set_contents_lang_direction(&mut self, direction: impl Into<String>) -> &mut Self {
        self.options.put_literal(CONTENTS_LANG_DIRECTION, direction);
        self
    }

    /// Language used when the user's language is not available.
    pub fn default_language(&self) -> Result<String> {
        self.options.literal_or(DEFAULT_LANGUAGE, "en")
    }

    pub fn set_default_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.options.put_literal(DEFAULT_LANGUAGE, language);
        self
    }

    /// UI language. Empty means detect from the browser.
    pub fn language(&self) -> Result<String> {
        self.options.literal_or(LANGUAGE, "")
    }

    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.options.put_literal(LANGUAGE, language);
        self
    }

    pub fn disable_native_spell_checker(&self) -> Result<bool> {
        self.options.boolean_or(DISABLE_NATIVE_SPELL_CHECKER, true)
    }

    pub fn set_disable_native_spell_checker(&mut self, disable: bool) -> &mut Self {
        self.options.put(DISABLE_NATIVE_SPELL_CHECKER, disable);
        self
    }

    pub fn entities_greek(&self) -> Result<bool> {
        self.options.boolean_or(ENTITIES_GREEK, true)
    }

    pub fn set_entities_greek(&mut self, convert: bool) -> &mut Self {
        self.options.put(ENTITIES_GREEK, convert);
        self
    }

    pub fn entities_latin(&self) -> Result<bool> {
        self.options.boolean_or(ENTITIES_LATIN, true)
    }

    pub fn set_entities_latin(&mut self, convert: bool) -> &mut Self {
        self.options.put(ENTITIES_LATIN, convert);
        self
    }

    pub fn entities_process_numerical(&self) -> Result<bool> {
        self.options.boolean_or(ENTITIES_PROCESS_NUMERICAL, false)
    }

    pub fn set_entities_process_numerical(&mut self, process: bool) -> &mut Self {
        self.options.put(ENTITIES_PROCESS_NUMERICAL, process);
        self
    }
}
