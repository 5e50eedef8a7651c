//! Options that apply to the whole editor rather than to one facet.

use super::CkEditorBehavior;
use crate::defaults;
use crate::error::Result;
use crate::options::{
    CommandKeyStrokeOption, ElementPathFilters, EnterMode, KeyStrokeOption, ListOption,
    OptionValue, RegExpOption, StartupMode, StyleOption,
};

const AUTO_UPDATE_ELEMENT: &str = "autoUpdateElement";
const BASE_FLOAT_Z_INDEX: &str = "baseFloatZIndex";
const BASE_HREF: &str = "baseHref";
const BLOCKED_KEYSTROKES: &str = "blockedKeystrokes";
const BODY_CLASS: &str = "bodyClass";
const BODY_ID: &str = "bodyId";
const BROWSER_CONTEXT_MENU_ON_CTRL: &str = "browserContextMenuOnCtrl";
const CUSTOM_CONFIG: &str = "customConfig";
const DISABLE_NATIVE_TABLE_HANDLES: &str = "disableNativeTableHandles";
const DOC_TYPE: &str = "docType";
const EDITING_BLOCK: &str = "editingBlock";
const ELEMENTS_PATH_FILTERS: &str = "elementsPath_filters";
const EMAIL_PROTECTION: &str = "emailProtection";
const ENTER_MODE: &str = "enterMode";
const SHIFT_ENTER_MODE: &str = "shiftEnterMode";
const EXTRA_PLUGINS: &str = "extraPlugins";
const FIND_HIGHLIGHT: &str = "find_highlight";
const HTML_ENCODE_OUTPUT: &str = "htmlEncodeOutput";
const IGNORE_EMPTY_PARAGRAPH: &str = "ignoreEmptyParagraph";
const KEYSTROKES: &str = "keystrokes";
const MENU_GROUPS: &str = "menu_groups";
const MENU_SUB_MENU_DELAY: &str = "menu_subMenuDelay";
const NEW_PAGE_HTML: &str = "newpage_html";
const PROTECTED_SOURCE: &str = "protectedSource";
const REMOVE_PLUGINS: &str = "removePlugins";
const STARTUP_FOCUS: &str = "startupFocus";
const STARTUP_MODE: &str = "startupMode";
const STARTUP_OUTLINE_BLOCKS: &str = "startupOutlineBlocks";
const TAB_INDEX: &str = "tabIndex";
const TAB_SPACES: &str = "tabSpaces";
const UNDO_STACK_SIZE: &str = "undoStackSize";

impl CkEditorBehavior {
    /// Keep the textarea in sync with the editor on form submit.
    pub fn auto_update_element(&self) -> Result<bool> {
        self.options.boolean_or(AUTO_UPDATE_ELEMENT, true)
    }

    pub fn set_auto_update_element(&mut self, update: bool) -> &mut Self {
        self.options.put(AUTO_UPDATE_ELEMENT, update);
        self
    }

    /// z-index of the first floating panel; later panels stack above it.
    pub fn base_float_z_index(&self) -> Result<i64> {
        self.options.int_or(BASE_FLOAT_Z_INDEX, 10000)
    }

    pub fn set_base_float_z_index(&mut self, z_index: i64) -> &mut Self {
        self.options.put(BASE_FLOAT_Z_INDEX, z_index);
        self
    }

    pub fn base_href(&self) -> Result<String> {
        self.options.literal_or(BASE_HREF, "")
    }

    pub fn set_base_href(&mut self, href: impl Into<String>) -> &mut Self {
        self.options.put_literal(BASE_HREF, href);
        self
    }

    pub fn blocked_keystrokes(&self) -> Result<Vec<KeyStrokeOption>> {
        self.options
            .list_or_else(BLOCKED_KEYSTROKES, defaults::blocked_keystrokes)
    }

    pub fn set_blocked_keystrokes(
        &mut self,
        keystrokes: impl IntoIterator<Item = KeyStrokeOption>,
    ) -> &mut Self {
        self.options
            .put(BLOCKED_KEYSTROKES, OptionValue::list(keystrokes));
        self
    }

    pub fn body_class(&self) -> Result<String> {
        self.options.literal_or(BODY_CLASS, "")
    }

    pub fn set_body_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.options.put_literal(BODY_CLASS, class);
        self
    }

    pub fn body_id(&self) -> Result<String> {
        self.options.literal_or(BODY_ID, "")
    }

    pub fn set_body_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.options.put_literal(BODY_ID, id);
        self
    }

    pub fn browser_context_menu_on_ctrl(&self) -> Result<bool> {
        self.options
            .boolean_or(BROWSER_CONTEXT_MENU_ON_CTRL, true)
    }

    pub fn set_browser_context_menu_on_ctrl(&mut self, enabled: bool) -> &mut Self {
        self.options.put(BROWSER_CONTEXT_MENU_ON_CTRL, enabled);
        self
    }

    pub fn custom_config(&self) -> Result<String> {
        self.options
            .literal_or(CUSTOM_CONFIG, defaults::CUSTOM_CONFIG)
    }

    pub fn set_custom_config(&mut self, path: impl Into<String>) -> &mut Self {
        self.options.put_literal(CUSTOM_CONFIG, path);
        self
    }

    pub fn disable_native_table_handles(&self) -> Result<bool> {
        self.options
            .boolean_or(DISABLE_NATIVE_TABLE_HANDLES, true)
    }

    pub fn set_disable_native_table_handles(&mut self, disable: bool) -> &mut Self {
        self.options.put(DISABLE_NATIVE_TABLE_HANDLES, disable);
        self
    }

    pub fn doc_type(&self) -> Result<String> {
        self.options.literal_or(DOC_TYPE, defaults::DOC_TYPE)
    }

    pub fn set_doc_type(&mut self, doc_type: impl Into<String>) -> &mut Self {
        self.options.put_literal(DOC_TYPE, doc_type);
        self
    }

    pub fn editing_block(&self) -> Result<bool> {
        self.options.boolean_or(EDITING_BLOCK, true)
    }

    pub fn set_editing_block(&mut self, enabled: bool) -> &mut Self {
        self.options.put(EDITING_BLOCK, enabled);
        self
    }

    pub fn elements_path_filters(&self) -> Result<ElementPathFilters> {
        self.options
            .complex_or_else(ELEMENTS_PATH_FILTERS, ElementPathFilters::new)
    }

    pub fn set_elements_path_filters(&mut self, filters: ElementPathFilters) -> &mut Self {
        self.options.put(ELEMENTS_PATH_FILTERS, filters);
        self
    }

    /// `""` leaves addresses alone, `encode` obfuscates them, anything else
    /// is a custom function name.
    pub fn email_protection(&self) -> Result<String> {
        self.options.literal_or(EMAIL_PROTECTION, "")
    }

    pub fn set_email_protection(&mut self, protection: impl Into<String>) -> &mut Self {
        self.options.put_literal(EMAIL_PROTECTION, protection);
        self
    }

    pub fn enter_mode(&self) -> Result<EnterMode> {
        self.options.complex_or_else(ENTER_MODE, || EnterMode::P)
    }

    pub fn set_enter_mode(&mut self, mode: EnterMode) -> &mut Self {
        self.options.put(ENTER_MODE, mode);
        self
    }

    pub fn shift_enter_mode(&self) -> Result<EnterMode> {
        self.options
            .complex_or_else(SHIFT_ENTER_MODE, || EnterMode::P)
    }

    pub fn set_shift_enter_mode(&mut self, mode: EnterMode) -> &mut Self {
        self.options.put(SHIFT_ENTER_MODE, mode);
        self
    }

    /// Comma separated plugin names loaded on top of the defaults.
    pub fn extra_plugins(&self) -> Result<String> {
        self.options
            .literal_or(EXTRA_PLUGINS, "myplugin,anotherplugin")
    }

    pub fn set_extra_plugins(&mut self, plugins: impl Into<String>) -> &mut Self {
        self.options.put_literal(EXTRA_PLUGINS, plugins);
        self
    }

    pub fn find_highlight(&self) -> Result<Option<StyleOption>> {
        self.options.complex(FIND_HIGHLIGHT)
    }

    pub fn set_find_highlight(&mut self, style: StyleOption) -> &mut Self {
        self.options.put(FIND_HIGHLIGHT, style);
        self
    }

    pub fn html_encode_output(&self) -> Result<bool> {
        self.options.boolean_or(HTML_ENCODE_OUTPUT, false)
    }

    pub fn set_html_encode_output(&mut self, encode: bool) -> &mut Self {
        self.options.put(HTML_ENCODE_OUTPUT, encode);
        self
    }

    pub fn ignore_empty_paragraph(&self) -> Result<bool> {
        self.options.boolean_or(IGNORE_EMPTY_PARAGRAPH, true)
    }

    pub fn set_ignore_empty_paragraph(&mut self, ignore: bool) -> &mut Self {
        self.options.put(IGNORE_EMPTY_PARAGRAPH, ignore);
        self
    }

    pub fn keystrokes(&self) -> Result<Vec<CommandKeyStrokeOption>> {
        self.options.list_or_else(KEYSTROKES, defaults::keystrokes)
    }

    pub fn set_keystrokes(
        &mut self,
        keystrokes: impl IntoIterator<Item = CommandKeyStrokeOption>,
    ) -> &mut Self {
        self.options.put(KEYSTROKES, OptionValue::list(keystrokes));
        self
    }

    pub fn menu_groups(&self) -> Result<String> {
        self.options.literal_or(MENU_GROUPS, defaults::MENU_GROUPS)
    }

    pub fn set_menu_groups(&mut self, groups: impl Into<String>) -> &mut Self {
        self.options.put_literal(MENU_GROUPS, groups);
        self
    }

    /// Milliseconds before a sub menu opens on hover.
    pub fn menu_sub_menu_delay(&self) -> Result<i64> {
        self.options.int_or(MENU_SUB_MENU_DELAY, 400)
    }

    pub fn set_menu_sub_menu_delay(&mut self, delay: i64) -> &mut Self {
        self.options.put(MENU_SUB_MENU_DELAY, delay);
        self
    }

    pub fn new_page_html(&self) -> Result<String> {
        self.options.literal_or(NEW_PAGE_HTML, "")
    }

    pub fn set_new_page_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.options.put_literal(NEW_PAGE_HTML, html);
        self
    }

    /// Source fragments the editor must leave untouched, such as
    /// server-side template tags.
    pub fn protected_source(&self) -> Result<Vec<RegExpOption>> {
        self.options.list_or_else(PROTECTED_SOURCE, Vec::new)
    }

    pub fn set_protected_source(
        &mut self,
        patterns: impl IntoIterator<Item = RegExpOption>,
    ) -> &mut Self {
        self.options
            .put(PROTECTED_SOURCE, OptionValue::list(patterns));
        self
    }

    pub fn remove_plugins(&self) -> Result<ListOption> {
        self.options
            .complex_or_else(REMOVE_PLUGINS, defaults::remove_plugins)
    }

    pub fn set_remove_plugins(&mut self, plugins: ListOption) -> &mut Self {
        self.options.put(REMOVE_PLUGINS, plugins);
        self
    }

    pub fn startup_focus(&self) -> Result<bool> {
        self.options.boolean_or(STARTUP_FOCUS, false)
    }

    pub fn set_startup_focus(&mut self, focus: bool) -> &mut Self {
        self.options.put(STARTUP_FOCUS, focus);
        self
    }

    pub fn startup_mode(&self) -> Result<StartupMode> {
        self.options
            .complex_or_else(STARTUP_MODE, || StartupMode::Wysiwyg)
    }

    pub fn set_startup_mode(&mut self, mode: StartupMode) -> &mut Self {
        self.options.put(STARTUP_MODE, mode);
        self
    }

    pub fn startup_outline_blocks(&self) -> Result<bool> {
        self.options.boolean_or(STARTUP_OUTLINE_BLOCKS, true)
    }

    pub fn set_startup_outline_blocks(&mut self, outline: bool) -> &mut Self {
        self.options.put(STARTUP_OUTLINE_BLOCKS, outline);
        self
    }

    pub fn tab_index(&self) -> Result<i64> {
        self.options.int_or(TAB_INDEX, 0)
    }

    pub fn set_tab_index(&mut self, index: i64) -> &mut Self {
        self.options.put(TAB_INDEX, index);
        self
    }

    /// Spaces inserted by Tab. Zero moves focus out of the editor instead.
    pub fn tab_spaces(&self) -> Result<i64> {
        self.options.int_or(TAB_SPACES, 0)
    }

    pub fn set_tab_spaces(&mut self, spaces: i64) -> &mut Self {
        self.options.put(TAB_SPACES, spaces);
        self
    }

    pub fn undo_stack_size(&self) -> Result<i64> {
        self.options.int_or(UNDO_STACK_SIZE, 20)
    }

    pub fn set_undo_stack_size(&mut self, size: i64) -> &mut Self {
        self.options.put(UNDO_STACK_SIZE, size);
        self
    }
}
