//! HTTP request handlers.

/// Editor page, init statement and command endpoints.
pub mod editor;
