//! Regular expression literals, used by `protectedSource`.

use super::ToJs;
use crate::error::{EditorError, Result};

/// Flags appended after the closing slash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegExpFlag {
    G,
    Gi,
    I,
    #[default]
    None,
}

impl RegExpFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            RegExpFlag::G => "g",
            RegExpFlag::Gi => "gi",
            RegExpFlag::I => "i",
            RegExpFlag::None => "",
        }
    }
}

/// A JavaScript regular expression literal: `/pattern/flags`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegExpOption {
    pattern: String,
    flag: RegExpFlag,
}

impl RegExpOption {
    /// Build a regexp literal.
    ///
    /// # Errors
    /// Returns [`EditorError::InvalidValue`] when the pattern is empty (`//`
    /// would start a comment), contains a line terminator, or ends in an
    /// unpaired backslash that would escape the closing slash.
    pub fn new(pattern: impl Into<String>, flag: RegExpFlag) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(EditorError::InvalidValue(
                "regular expression pattern cannot be empty".to_string(),
            ));
        }
        if pattern
            .chars()
            .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
        {
            return Err(EditorError::InvalidValue(format!(
                "regular expression pattern contains a line break: {:?}",
                pattern
            )));
        }
        let trailing = pattern.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            return Err(EditorError::InvalidValue(format!(
                "regular expression pattern ends in a dangling backslash: {:?}",
                pattern
            )));
        }
        Ok(Self { pattern, flag })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flag(&self) -> RegExpFlag {
        self.flag
    }

    pub fn set_flag(&mut self, flag: RegExpFlag) {
        self.flag = flag;
    }
}

/// Escape every `/` not already preceded by a backslash.
fn escape_slashes(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut escaped = false;
    for c in pattern.chars() {
        if c == '/' && !escaped {
            out.push('\\');
        }
        escaped = c == '\\' && !escaped;
        out.push(c);
    }
    out
}

impl ToJs for RegExpOption {
    fn to_js(&self) -> String {
        format!("/{}/{}", escape_slashes(&self.pattern), self.flag.as_str())
    }
}
