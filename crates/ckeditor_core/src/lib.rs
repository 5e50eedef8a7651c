//! Core library for binding a CKEditor instance to a page element
//! (options model, facets, behavior, settings).

/// Editor behavior, binding and command statements.
pub mod behavior;
/// Fallback values for list-shaped options.
pub mod defaults;
/// Error types.
pub mod error;
/// Defaulted accessors grouped by concern.
pub mod facets;
/// JavaScript literal helpers.
pub mod js;
/// Options store and value types.
pub mod options;
/// Script resources and host traits.
pub mod resources;
/// JSON editor settings.
pub mod settings;

pub use behavior::{CkEditorBehavior, EditorCommand};
pub use error::{EditorError, Result};
pub use js::{JsQuery, JsScope, JsStatement};
pub use options::{OptionValue, Options, ToJs};
pub use resources::{Component, JavaScriptResource, ResourceRegistry};
pub use settings::EditorSettings;
