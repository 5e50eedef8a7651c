//! CKEditor binding: typed editor options rendered into a jQuery
//! initialization call, plus an axum host for it.
//!
//! The options model lives in [`ckeditor_core`] and is re-exported at the
//! crate root; the HTTP surface is available as [`server`].

pub use ckeditor_core::*;

/// HTTP host for the editor page and statements.
pub use ckeditor_server as server;
