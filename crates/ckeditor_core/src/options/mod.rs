//! Generic options store and the value types it renders.
//!
//! [`Options`] maps option names to [`OptionValue`]s and serializes every
//! entry into one JavaScript object literal. It knows nothing about
//! defaults: facets ask it whether a value is present and supply their own
//! fallback when it is not.

/// Block/inline format descriptors.
pub mod format;
/// HTML element names.
pub mod html_tag;
/// Key combinations.
pub mod keystroke;
/// String lists and filter callbacks.
pub mod list;
/// Enumerated mode options.
pub mod modes;
/// Regular expression literals.
pub mod regexp;
/// Sizes with a CSS metric.
pub mod size;
/// Style descriptors.
pub mod style;
/// Toolbar layout.
pub mod toolbar;

#[cfg(test)]
mod tests;

pub use format::FormatOption;
pub use html_tag::HtmlTag;
pub use keystroke::{CommandKeyStrokeOption, KeyStrokeMask, KeyStrokeOption};
pub use list::{ElementPathFilters, ListOption};
pub use modes::{EnterMode, StartupMode, ToolbarLocation};
pub use regexp::{RegExpFlag, RegExpOption};
pub use size::{SizeMetric, SizeOption};
pub use style::StyleOption;
pub use toolbar::{Toolbar, ToolbarGroup, ToolbarItem, ToolbarPreset};

use crate::error::{EditorError, Result};
use crate::js;
use indexmap::IndexMap;

/// Anything that renders itself as a JavaScript expression.
pub trait ToJs {
    fn to_js(&self) -> String;
}

/// Plain scalar option values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl ToJs for Scalar {
    fn to_js(&self) -> String {
        match self {
            Scalar::Bool(value) => value.to_string(),
            Scalar::Int(value) => value.to_string(),
            Scalar::Float(value) if value.is_nan() => "NaN".to_string(),
            Scalar::Float(value) if value.is_infinite() => {
                if value.is_sign_positive() {
                    "Infinity".to_string()
                } else {
                    "-Infinity".to_string()
                }
            }
            Scalar::Float(value) => value.to_string(),
        }
    }
}

/// One entry of a list-valued option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Literal(String),
    KeyStroke(KeyStrokeOption),
    CommandKeyStroke(CommandKeyStrokeOption),
    RegExp(RegExpOption),
}

impl ListItem {
    fn kind(&self) -> &'static str {
        match self {
            ListItem::Literal(_) => "literal",
            ListItem::KeyStroke(_) => "keystroke",
            ListItem::CommandKeyStroke(_) => "command keystroke",
            ListItem::RegExp(_) => "regexp",
        }
    }
}

impl ToJs for ListItem {
    fn to_js(&self) -> String {
        match self {
            ListItem::Literal(text) => js::quotes(text),
            ListItem::KeyStroke(stroke) => stroke.to_js(),
            ListItem::CommandKeyStroke(stroke) => stroke.to_js(),
            ListItem::RegExp(regexp) => regexp.to_js(),
        }
    }
}

/// Typed view over a [`ListItem`] variant.
pub trait ListItemKind: Clone + Into<ListItem> {
    const KIND: &'static str;
    fn from_item(item: &ListItem) -> Option<&Self>;
}

macro_rules! list_item_kind {
    ($ty:ty, $variant:ident, $kind:literal) => {
        impl From<$ty> for ListItem {
            fn from(value: $ty) -> Self {
                ListItem::$variant(value)
            }
        }

        impl ListItemKind for $ty {
            const KIND: &'static str = $kind;

            fn from_item(item: &ListItem) -> Option<&Self> {
                match item {
                    ListItem::$variant(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

list_item_kind!(String, Literal, "literal");
list_item_kind!(KeyStrokeOption, KeyStroke, "keystroke");
list_item_kind!(CommandKeyStrokeOption, CommandKeyStroke, "command keystroke");
list_item_kind!(RegExpOption, RegExp, "regexp");

/// Values that render themselves to an arbitrary expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ComplexOption {
    Size(SizeOption),
    KeyStroke(KeyStrokeOption),
    CommandKeyStroke(CommandKeyStrokeOption),
    RegExp(RegExpOption),
    Format(FormatOption),
    Style(StyleOption),
    List(ListOption),
    Toolbar(Toolbar),
    EnterMode(EnterMode),
    StartupMode(StartupMode),
    ToolbarLocation(ToolbarLocation),
    ElementPathFilters(ElementPathFilters),
}

impl ComplexOption {
    fn kind(&self) -> &'static str {
        match self {
            ComplexOption::Size(_) => "size",
            ComplexOption::KeyStroke(_) => "keystroke",
            ComplexOption::CommandKeyStroke(_) => "command keystroke",
            ComplexOption::RegExp(_) => "regexp",
            ComplexOption::Format(_) => "format",
            ComplexOption::Style(_) => "style",
            ComplexOption::List(_) => "list",
            ComplexOption::Toolbar(_) => "toolbar",
            ComplexOption::EnterMode(_) => "enter mode",
            ComplexOption::StartupMode(_) => "startup mode",
            ComplexOption::ToolbarLocation(_) => "toolbar location",
            ComplexOption::ElementPathFilters(_) => "element path filters",
        }
    }
}

impl ToJs for ComplexOption {
    fn to_js(&self) -> String {
        match self {
            ComplexOption::Size(value) => value.to_js(),
            ComplexOption::KeyStroke(value) => value.to_js(),
            ComplexOption::CommandKeyStroke(value) => value.to_js(),
            ComplexOption::RegExp(value) => value.to_js(),
            ComplexOption::Format(value) => value.to_js(),
            ComplexOption::Style(value) => value.to_js(),
            ComplexOption::List(value) => value.to_js(),
            ComplexOption::Toolbar(value) => value.to_js(),
            ComplexOption::EnterMode(value) => value.to_js(),
            ComplexOption::StartupMode(value) => value.to_js(),
            ComplexOption::ToolbarLocation(value) => value.to_js(),
            ComplexOption::ElementPathFilters(value) => value.to_js(),
        }
    }
}

/// Typed view over a [`ComplexOption`] variant.
pub trait ComplexKind: Clone + Into<ComplexOption> {
    const KIND: &'static str;
    fn from_complex(option: &ComplexOption) -> Option<&Self>;
}

macro_rules! complex_kind {
    ($ty:ty, $variant:ident, $kind:literal) => {
        impl From<$ty> for ComplexOption {
            fn from(value: $ty) -> Self {
                ComplexOption::$variant(value)
            }
        }

        impl From<$ty> for OptionValue {
            fn from(value: $ty) -> Self {
                OptionValue::Complex(ComplexOption::$variant(value))
            }
        }

        impl ComplexKind for $ty {
            const KIND: &'static str = $kind;

            fn from_complex(option: &ComplexOption) -> Option<&Self> {
                match option {
                    ComplexOption::$variant(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

complex_kind!(SizeOption, Size, "size");
complex_kind!(KeyStrokeOption, KeyStroke, "keystroke");
complex_kind!(CommandKeyStrokeOption, CommandKeyStroke, "command keystroke");
complex_kind!(RegExpOption, RegExp, "regexp");
complex_kind!(FormatOption, Format, "format");
complex_kind!(StyleOption, Style, "style");
complex_kind!(ListOption, List, "list");
complex_kind!(Toolbar, Toolbar, "toolbar");
complex_kind!(EnterMode, EnterMode, "enter mode");
complex_kind!(StartupMode, StartupMode, "startup mode");
complex_kind!(ToolbarLocation, ToolbarLocation, "toolbar location");
complex_kind!(ElementPathFilters, ElementPathFilters, "element path filters");

/// A stored option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Rendered as a quoted string.
    Literal(String),
    Scalar(Scalar),
    List(Vec<ListItem>),
    Complex(ComplexOption),
}

impl OptionValue {
    /// Build a list value from typed items.
    pub fn list<T, I>(items: I) -> Self
    where
        T: Into<ListItem>,
        I: IntoIterator<Item = T>,
    {
        OptionValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Human-readable type name used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Literal(_) => "literal",
            OptionValue::Scalar(Scalar::Bool(_)) => "boolean",
            OptionValue::Scalar(Scalar::Int(_)) => "integer",
            OptionValue::Scalar(Scalar::Float(_)) => "float",
            OptionValue::List(_) => "list",
            OptionValue::Complex(option) => option.kind(),
        }
    }
}

impl ToJs for OptionValue {
    fn to_js(&self) -> String {
        match self {
            OptionValue::Literal(text) => js::quotes(text),
            OptionValue::Scalar(scalar) => scalar.to_js(),
            OptionValue::List(items) => js::array(items.iter().map(ToJs::to_js)),
            OptionValue::Complex(option) => option.to_js(),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Scalar(Scalar::Int(i64::from(value)))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Scalar(Scalar::Int(i64::from(value)))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Scalar(Scalar::Float(value))
    }
}

impl From<f32> for OptionValue {
    fn from(value: f32) -> Self {
        OptionValue::Scalar(Scalar::Float(f64::from(value)))
    }
}

impl From<ComplexOption> for OptionValue {
    fn from(value: ComplexOption) -> Self {
        OptionValue::Complex(value)
    }
}

impl From<Vec<ListItem>> for OptionValue {
    fn from(value: Vec<ListItem>) -> Self {
        OptionValue::List(value)
    }
}

/// Insertion-ordered option map shared by every facet of one editor.
///
/// Typed getters follow a checked-cast policy: `Ok(None)` when the option
/// is absent, [`EditorError::TypeMismatch`] when it holds another type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    entries: IndexMap<String, OptionValue>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any previous one under the same name.
    pub fn put(&mut self, name: &str, value: impl Into<OptionValue>) -> &mut Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    /// Store a value rendered as a quoted string.
    pub fn put_literal(&mut self, name: &str, text: impl Into<String>) -> &mut Self {
        self.put(name, OptionValue::Literal(text.into()))
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Drop an option so it falls back to its default again.
    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        self.entries.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn mismatch(name: &str, expected: &'static str, found: &OptionValue) -> EditorError {
        EditorError::TypeMismatch {
            name: name.to_string(),
            expected,
            found: found.kind(),
        }
    }

    pub fn get_boolean(&self, name: &str) -> Result<Option<bool>> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Scalar(Scalar::Bool(value))) => Ok(Some(*value)),
            Some(other) => Err(Self::mismatch(name, "boolean", other)),
        }
    }

    pub fn get_int(&self, name: &str) -> Result<Option<i64>> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Scalar(Scalar::Int(value))) => Ok(Some(*value)),
            Some(other) => Err(Self::mismatch(name, "integer", other)),
        }
    }

    /// Integers are widened; every other type is a mismatch.
    pub fn get_float(&self, name: &str) -> Result<Option<f64>> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Scalar(Scalar::Float(value))) => Ok(Some(*value)),
            Some(OptionValue::Scalar(Scalar::Int(value))) => Ok(Some(*value as f64)),
            Some(other) => Err(Self::mismatch(name, "float", other)),
        }
    }

    /// Raw text of a literal option.
    pub fn get_literal(&self, name: &str) -> Result<Option<&str>> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Literal(text)) => Ok(Some(text.as_str())),
            Some(other) => Err(Self::mismatch(name, "literal", other)),
        }
    }

    pub fn get_complex<T: ComplexKind>(&self, name: &str) -> Result<Option<&T>> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Complex(option)) => T::from_complex(option)
                .map(Some)
                .ok_or_else(|| EditorError::TypeMismatch {
                    name: name.to_string(),
                    expected: T::KIND,
                    found: option.kind(),
                }),
            Some(other) => Err(Self::mismatch(name, T::KIND, other)),
        }
    }

    /// Items of a list option, all of which must be of type `T`.
    pub fn get_list_items<T: ListItemKind>(&self, name: &str) -> Result<Option<Vec<T>>> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::List(items)) => items
                .iter()
                .map(|item| {
                    T::from_item(item).cloned().ok_or_else(|| EditorError::TypeMismatch {
                        name: name.to_string(),
                        expected: T::KIND,
                        found: item.kind(),
                    })
                })
                .collect::<Result<Vec<T>>>()
                .map(Some),
            Some(other) => Err(Self::mismatch(name, "list", other)),
        }
    }

    pub fn boolean_or(&self, name: &str, default: bool) -> Result<bool> {
        Ok(self.get_boolean(name)?.unwrap_or(default))
    }

    pub fn int_or(&self, name: &str, default: i64) -> Result<i64> {
        Ok(self.get_int(name)?.unwrap_or(default))
    }

    pub fn float_or(&self, name: &str, default: f64) -> Result<f64> {
        Ok(self.get_float(name)?.unwrap_or(default))
    }

    pub fn literal_or(&self, name: &str, default: &str) -> Result<String> {
        Ok(self.get_literal(name)?.unwrap_or(default).to_string())
    }

    /// Owned copy of a complex option, if present.
    pub fn complex<T: ComplexKind>(&self, name: &str) -> Result<Option<T>> {
        Ok(self.get_complex::<T>(name)?.cloned())
    }

    pub fn complex_or_else<T: ComplexKind>(
        &self,
        name: &str,
        default: impl FnOnce() -> T,
    ) -> Result<T> {
        Ok(self.complex(name)?.unwrap_or_else(default))
    }

    pub fn list_or_else<T: ListItemKind>(
        &self,
        name: &str,
        default: impl FnOnce() -> Vec<T>,
    ) -> Result<Vec<T>> {
        Ok(self.get_list_items(name)?.unwrap_or_else(default))
    }
}

impl ToJs for Options {
    /// `{name: expr, name2: expr2}` in insertion order; `{}` when empty.
    fn to_js(&self) -> String {
        let body = self
            .entries
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value.to_js()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{}}}", body)
    }
}
