//! The editor behavior: owns the options, binds to a textarea and renders
//! the client-side statements.

mod command;
mod editor;


pub use command::{Argument, EditorCommand};

use crate::error::{EditorError, Result};
use crate::facets::{
    DialogFacet, FileBrowserFacet, FontFacet, FormatFacet, LocaleFacet, PasteFacet, PictureFacet,
    SizeFacet, StyleSheetFacet, ToolbarFacet,
};
use crate::js::{self, JsQuery, JsStatement};
use crate::options::{Options, ToJs};
use crate::resources::{self, Component, ResourceRegistry};

/// Turns a `<textarea>` into a CKEditor instance.
///
/// All facets share the single [`Options`] store owned here. Configure
/// through the facets, [`bind`](Self::bind) to the element, then call
/// [`statement`](Self::statement) to get the initialization call.
///
/// # Example
///
/// ```
/// use ckeditor_core::{CkEditorBehavior, Component};
/// use ckeditor_core::options::SizeOption;
///
/// struct Textarea;
///
/// impl Component for Textarea {
///     fn tag_name(&self) -> &str { "textarea" }
///     fn markup_id(&self) -> &str { "body" }
/// }
///
/// let mut behavior = CkEditorBehavior::new();
/// behavior.size().set_height(SizeOption::pixels(300));
/// behavior.bind(&Textarea).unwrap();
/// assert_eq!(
///     behavior.statement().unwrap().render(),
///     "$('#body').ckeditor({height: '300px'});"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CkEditorBehavior {
    options: Options,
    markup_id: Option<String>,
}

impl CkEditorBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialog(&mut self) -> DialogFacet<'_> {
        DialogFacet::new(&mut self.options)
    }

    pub fn locale(&mut self) -> LocaleFacet<'_> {
        LocaleFacet::new(&mut self.options)
    }

    pub fn font(&mut self) -> FontFacet<'_> {
        FontFacet::new(&mut self.options)
    }

    pub fn format(&mut self) -> FormatFacet<'_> {
        FormatFacet::new(&mut self.options)
    }

    pub fn file_browser(&mut self) -> FileBrowserFacet<'_> {
        FileBrowserFacet::new(&mut self.options)
    }

    pub fn paste(&mut self) -> PasteFacet<'_> {
        PasteFacet::new(&mut self.options)
    }

    pub fn picture(&mut self) -> PictureFacet<'_> {
        PictureFacet::new(&mut self.options)
    }

    pub fn style_sheet(&mut self) -> StyleSheetFacet<'_> {
        StyleSheetFacet::new(&mut self.options)
    }

    pub fn size(&mut self) -> SizeFacet<'_> {
        SizeFacet::new(&mut self.options)
    }

    pub fn toolbar(&mut self) -> ToolbarFacet<'_> {
        ToolbarFacet::new(&mut self.options)
    }

    /// Read-only view of every option set so far.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Declare the scripts the page must load.
    pub fn contribute<R: ResourceRegistry + ?Sized>(&self, registry: &mut R) {
        registry.add_javascript(resources::CKEDITOR_JS);
        registry.add_javascript(resources::JQUERY_ADAPTER_JS);
    }

    /// Attach to a page element.
    ///
    /// # Errors
    /// Returns [`EditorError::UnsupportedElement`] unless the element is a
    /// `textarea` (case-insensitive). A failed bind leaves the behavior
    /// unbound.
    pub fn bind<C: Component + ?Sized>(&mut self, component: &C) -> Result<()> {
        let tag = component.tag_name();
        if !tag.eq_ignore_ascii_case("textarea") {
            tracing::warn!(tag, id = component.markup_id(), "refusing to bind editor");
            return Err(EditorError::UnsupportedElement {
                found: tag.to_string(),
            });
        }
        tracing::debug!(id = component.markup_id(), "editor bound");
        self.markup_id = Some(component.markup_id().to_string());
        Ok(())
    }

    pub fn markup_id(&self) -> Option<&str> {
        self.markup_id.as_deref()
    }

    fn query(&self) -> Result<JsQuery> {
        self.markup_id
            .as_deref()
            .map(JsQuery::new)
            .ok_or(EditorError::Unbound)
    }

    /// `$('#id').ckeditor({...});` with every option set so far.
    pub fn statement(&self) -> Result<JsStatement> {
        let query = self.query()?;
        let options = self.options.to_js();
        tracing::debug!(options = self.options.len(), "rendering editor statement");
        Ok(query.dollar().chain("ckeditor", &[options]))
    }

    /// `$('#id').ckeditorGet().<method>(arg)`.
    ///
    /// # Errors
    /// [`EditorError::Unbound`] before [`bind`](Self::bind), and
    /// [`EditorError::InvalidValue`] when `arg` is missing for a command that
    /// needs one or given to one that takes none.
    pub fn command(&self, command: EditorCommand, arg: Option<&str>) -> Result<JsStatement> {
        let target = self.query()?.dollar().call("ckeditorGet");
        match (command.argument(), arg) {
            (Argument::None, None) => Ok(target.call(command.method())),
            (Argument::Raw, Some(arg)) => Ok(target.chain(command.method(), &[arg])),
            (Argument::Quoted, Some(arg)) => {
                Ok(target.chain(command.method(), &[js::quotes(arg)]))
            }
            (Argument::None, Some(_)) => Err(EditorError::InvalidValue(format!(
                "{} takes no argument",
                command.method()
            ))),
            (_, None) => Err(EditorError::InvalidValue(format!(
                "{} needs an argument",
                command.method()
            ))),
        }
    }

    /// Look a command up by name and render it.
    pub fn command_by_name(&self, name: &str, arg: Option<&str>) -> Result<JsStatement> {
        self.command(name.parse()?, arg)
    }

    pub fn check_dirty(&self) -> Result<JsStatement> {
        self.command(EditorCommand::CheckDirty, None)
    }

    /// Tear the editor down and restore the textarea.
    pub fn destroy(&self) -> Result<JsStatement> {
        self.command(EditorCommand::Destroy, None)
    }

    pub fn focus(&self) -> Result<JsStatement> {
        self.command(EditorCommand::Focus, None)
    }

    pub fn get_data(&self) -> Result<JsStatement> {
        self.command(EditorCommand::GetData, None)
    }

    pub fn get_selection(&self) -> Result<JsStatement> {
        self.command(EditorCommand::GetSelection, None)
    }

    pub fn get_snapshot(&self) -> Result<JsStatement> {
        self.command(EditorCommand::GetSnapshot, None)
    }

    /// `element` is a JavaScript expression and is not quoted.
    pub fn insert_element(&self, element: &str) -> Result<JsStatement> {
        self.command(EditorCommand::InsertElement, Some(element))
    }

    pub fn insert_html(&self, html: &str) -> Result<JsStatement> {
        self.command(EditorCommand::InsertHtml, Some(html))
    }

    pub fn insert_text(&self, text: &str) -> Result<JsStatement> {
        self.command(EditorCommand::InsertText, Some(text))
    }

    pub fn set_data(&self, html: &str) -> Result<JsStatement> {
        self.command(EditorCommand::SetData, Some(html))
    }
}
