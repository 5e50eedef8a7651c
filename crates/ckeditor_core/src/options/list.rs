//! Array-valued complex options: plain string lists and filter callbacks.

use super::ToJs;
use crate::js::{self, JsScope};

/// An ordered list of strings rendered as `['a','b']`.
///
/// Used for `removePlugins`, `removeFormatTags` and `colorButton_colors`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListOption(Vec<String>);

impl ListOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.0.push(item.into());
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.iter().any(|existing| existing == item)
    }
}

impl<S: Into<String>> FromIterator<S> for ListOption {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl ToJs for ListOption {
    fn to_js(&self) -> String {
        js::array(self.0.iter().map(|item| js::quotes(item)))
    }
}

/// Callbacks consulted by the elements path bar (`elementsPath_filters`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementPathFilters(Vec<JsScope>);

impl ElementPathFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: JsScope) {
        self.0.push(filter);
    }

    pub fn filters(&self) -> &[JsScope] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<JsScope> for ElementPathFilters {
    fn from_iter<I: IntoIterator<Item = JsScope>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl ToJs for ElementPathFilters {
    fn to_js(&self) -> String {
        js::array(self.0.iter().map(JsScope::render))
    }
}
