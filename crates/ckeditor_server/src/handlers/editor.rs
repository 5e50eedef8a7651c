//! Editor HTTP handlers.

use crate::{
    error::HttpError,
    page::{render_page, PageElement, ScriptRegistry},
    AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
};
use ckeditor_core::{CkEditorBehavior, ToJs};
use serde::Deserialize;

/// Id of the textarea on the demo page and the default for `id=`.
pub const DEFAULT_ELEMENT_ID: &str = "editor";

const JAVASCRIPT: &str = "application/javascript; charset=utf-8";

#[derive(Debug, Deserialize)]
pub struct InitQuery {
    pub id: Option<String>,
    pub element: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommandQuery {
    pub id: Option<String>,
    pub arg: Option<String>,
}

fn javascript(body: String) -> Response {
    ([(header::CONTENT_TYPE, HeaderValue::from_static(JAVASCRIPT))], body).into_response()
}

fn element_id(id: Option<String>) -> Result<String, HttpError> {
    let id = id.unwrap_or_else(|| DEFAULT_ELEMENT_ID.to_string());
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'));
    if valid {
        Ok(id)
    } else {
        Err(HttpError::BadRequest(format!("invalid element id '{}'", id)))
    }
}

/// Fresh behavior for one request, configured and bound to `element`.
fn bound_behavior(state: &AppState, element: &PageElement) -> Result<CkEditorBehavior, HttpError> {
    let mut behavior = state.behavior().map_err(HttpError::Settings)?;
    behavior.bind(element)?;
    Ok(behavior)
}

/// Demo page with a bound textarea.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let element = PageElement::textarea(DEFAULT_ELEMENT_ID);
    let behavior = bound_behavior(&state, &element)?;

    let mut registry = ScriptRegistry::new(state.config.base_path.clone());
    behavior.contribute(&mut registry);
    let mut scripts = vec![state.config.jquery_path.clone()];
    scripts.extend(registry.urls());

    let statement = behavior.statement()?.render();
    Ok(Html(render_page(&element, &scripts, &statement)))
}

/// `$('#id').ckeditor({...});` for the requested element.
pub async fn init_statement(
    State(state): State<AppState>,
    Query(query): Query<InitQuery>,
) -> Result<Response, HttpError> {
    let element = PageElement {
        tag: query.element.unwrap_or_else(|| "textarea".to_string()),
        id: element_id(query.id)?,
    };
    let behavior = bound_behavior(&state, &element)?;
    Ok(javascript(behavior.statement()?.render()))
}

/// The bare options object literal.
pub async fn options_literal(State(state): State<AppState>) -> Result<Response, HttpError> {
    let behavior = state.behavior().map_err(HttpError::Settings)?;
    Ok(javascript(behavior.options().to_js()))
}

/// `$('#id').ckeditorGet().<command>(arg);`
pub async fn command_statement(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<CommandQuery>,
) -> Result<Response, HttpError> {
    let element = PageElement::textarea(element_id(query.id)?);
    let behavior = bound_behavior(&state, &element)?;
    let statement = behavior.command_by_name(&name, query.arg.as_deref())?;
    tracing::debug!(command = %name, id = %element.id, "rendered editor command");
    Ok(javascript(statement.render()))
}

#[cfg(test)]
mod tests {
    use super::element_id;

    #[test]
    fn element_id_defaults_and_validates() {
        assert_eq!(element_id(None).unwrap(), "editor");
        assert_eq!(element_id(Some("notes-1".into())).unwrap(), "notes-1");
        assert!(element_id(Some("a'b".into())).is_err());
        assert!(element_id(Some(String::new())).is_err());
    }
}
