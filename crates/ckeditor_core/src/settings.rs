//! Editor settings loaded from JSON and applied through the facets.

use crate::behavior::CkEditorBehavior;
use crate::error::Result;
use crate::options::{
    EnterMode, ListOption, SizeOption, StartupMode, Toolbar, ToolbarGroup, ToolbarItem,
    ToolbarLocation, ToolbarPreset,
};
use serde::Deserialize;
use std::path::Path;

/// `toolbar` is either a preset name or rows of clusters of button labels.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ToolbarSetting {
    Preset(String),
    Rows(Vec<Vec<Vec<String>>>),
}

impl ToolbarSetting {
    pub fn to_toolbar(&self) -> Result<Toolbar> {
        match self {
            ToolbarSetting::Preset(name) => Ok(Toolbar::Preset(name.parse::<ToolbarPreset>()?)),
            ToolbarSetting::Rows(rows) => Ok(Toolbar::Groups(
                rows.iter()
                    .map(|row| {
                        row.iter().fold(ToolbarGroup::new(), |group, cluster| {
                            group.cluster(cluster.iter().map(|label| ToolbarItem::from_label(label)))
                        })
                    })
                    .collect(),
            )),
        }
    }
}

/// File browser endpoints.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileBrowserSettings {
    pub browse_url: Option<String>,
    pub upload_url: Option<String>,
    pub image_browse_url: Option<String>,
    pub image_upload_url: Option<String>,
    pub flash_browse_url: Option<String>,
    pub flash_upload_url: Option<String>,
}

/// Settings a deployment may override. Every field is optional; absent
/// fields leave the option unset so the editor default applies.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EditorSettings {
    pub language: Option<String>,
    pub default_language: Option<String>,
    pub skin: Option<String>,
    pub theme: Option<String>,
    /// CSS length such as `300px`, `50%` or `20em`.
    pub height: Option<String>,
    pub width: Option<String>,
    pub toolbar: Option<ToolbarSetting>,
    pub toolbar_location: Option<String>,
    pub toolbar_can_collapse: Option<bool>,
    pub enter_mode: Option<String>,
    pub shift_enter_mode: Option<String>,
    pub startup_mode: Option<String>,
    pub remove_plugins: Option<Vec<String>>,
    pub extra_plugins: Option<String>,
    pub resize_enabled: Option<bool>,
    pub force_paste_as_plain_text: Option<bool>,
    pub file_browser: FileBrowserSettings,
    pub content_css: Option<Vec<String>>,
    pub undo_stack_size: Option<i64>,
}

impl EditorSettings {
    /// Parse settings from a JSON document.
    ///
    /// # Errors
    /// Returns [`EditorError::Settings`](crate::EditorError::Settings) on
    /// malformed JSON or unexpected field types.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded editor settings");
        Ok(settings)
    }

    /// Write every present setting into `behavior`.
    ///
    /// Values are validated first, so a bad value leaves `behavior`
    /// untouched.
    pub fn apply(&self, behavior: &mut CkEditorBehavior) -> Result<()> {
        let height = self.height.as_deref().map(str::parse::<SizeOption>).transpose()?;
        let width = self.width.as_deref().map(str::parse::<SizeOption>).transpose()?;
        let toolbar = self.toolbar.as_ref().map(ToolbarSetting::to_toolbar).transpose()?;
        let toolbar_location = self
            .toolbar_location
            .as_deref()
            .map(str::parse::<ToolbarLocation>)
            .transpose()?;
        let enter_mode = self.enter_mode.as_deref().map(str::parse::<EnterMode>).transpose()?;
        let shift_enter_mode = self
            .shift_enter_mode
            .as_deref()
            .map(str::parse::<EnterMode>)
            .transpose()?;
        let startup_mode = self
            .startup_mode
            .as_deref()
            .map(str::parse::<StartupMode>)
            .transpose()?;

        if let Some(language) = &self.language {
            behavior.locale().set_language(language.as_str());
        }
        if let Some(language) = &self.default_language {
            behavior.locale().set_default_language(language.as_str());
        }
        if let Some(skin) = &self.skin {
            behavior.style_sheet().set_skin(skin.as_str());
        }
        if let Some(theme) = &self.theme {
            behavior.style_sheet().set_theme(theme.as_str());
        }
        if let Some(files) = &self.content_css {
            behavior.style_sheet().set_contents_css(files.iter().cloned());
        }
        if let Some(height) = height {
            behavior.size().set_height(height);
        }
        if let Some(width) = width {
            behavior.size().set_width(width);
        }
        if let Some(enabled) = self.resize_enabled {
            behavior.size().set_resize_enabled(enabled);
        }
        if let Some(toolbar) = toolbar {
            behavior.toolbar().set_toolbar(toolbar);
        }
        if let Some(location) = toolbar_location {
            behavior.toolbar().set_location(location);
        }
        if let Some(can_collapse) = self.toolbar_can_collapse {
            behavior.toolbar().set_can_collapse(can_collapse);
        }
        if let Some(force) = self.force_paste_as_plain_text {
            behavior.paste().set_force_paste_as_plain_text(force);
        }
        self.apply_file_browser(behavior);

        if let Some(mode) = enter_mode {
            behavior.set_enter_mode(mode);
        }
        if let Some(mode) = shift_enter_mode {
            behavior.set_shift_enter_mode(mode);
        }
        if let Some(mode) = startup_mode {
            behavior.set_startup_mode(mode);
        }
        if let Some(plugins) = &self.remove_plugins {
            behavior.set_remove_plugins(plugins.iter().cloned().collect::<ListOption>());
        }
        if let Some(plugins) = &self.extra_plugins {
            behavior.set_extra_plugins(plugins.as_str());
        }
        if let Some(size) = self.undo_stack_size {
            behavior.set_undo_stack_size(size);
        }
        Ok(())
    }

    fn apply_file_browser(&self, behavior: &mut CkEditorBehavior) {
        let urls = &self.file_browser;
        let mut facet = behavior.file_browser();
        if let Some(url) = &urls.browse_url {
            facet.set_browse_url(url.as_str());
        }
        if let Some(url) = &urls.upload_url {
            facet.set_upload_url(url.as_str());
        }
        if let Some(url) = &urls.image_browse_url {
            facet.set_image_browse_url(url.as_str());
        }
        if let Some(url) = &urls.image_upload_url {
            facet.set_image_upload_url(url.as_str());
        }
        if let Some(url) = &urls.flash_browse_url {
            facet.set_flash_browse_url(url.as_str());
        }
        if let Some(url) = &urls.flash_upload_url {
            facet.set_flash_upload_url(url.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;
    use crate::options::ToJs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_document_changes_nothing() {
        let settings = EditorSettings::from_json_str("{}").unwrap();
        assert_eq!(settings, EditorSettings::default());
        let mut behavior = CkEditorBehavior::new();
        settings.apply(&mut behavior).unwrap();
        assert!(behavior.options().is_empty());
    }

    #[test]
    fn applies_through_facets() {
        let settings = EditorSettings::from_json_str(
            r#"{
                "language": "de",
                "height": "300px",
                "width": "80%",
                "toolbar": [[["Bold", "Italic"], ["Link"]], [["Source", "-", "Undo"]]],
                "toolbar_location": "bottom",
                "enter_mode": "br",
                "remove_plugins": ["save"],
                "file_browser": {"upload_url": "/upload"}
            }"#,
        )
        .unwrap();
        let mut behavior = CkEditorBehavior::new();
        settings.apply(&mut behavior).unwrap();

        assert_eq!(behavior.locale().language().unwrap(), "de");
        assert_eq!(behavior.size().height().unwrap(), SizeOption::pixels(300));
        assert_eq!(behavior.size().width().unwrap(), Some(SizeOption::percent(80)));
        assert_eq!(
            behavior.toolbar().toolbar().unwrap().to_js(),
            "[['Bold','Italic'],['Link'],'/',['Source','-','Undo']]"
        );
        assert_eq!(behavior.toolbar().location().unwrap(), ToolbarLocation::Bottom);
        assert_eq!(behavior.enter_mode().unwrap(), EnterMode::Br);
        assert_eq!(behavior.remove_plugins().unwrap().items(), ["save"]);
        assert_eq!(behavior.file_browser().upload_url().unwrap(), "/upload");
    }

    #[test]
    fn preset_toolbar_by_name() {
        let settings = EditorSettings::from_json_str(r#"{"toolbar": "basic"}"#).unwrap();
        let mut behavior = CkEditorBehavior::new();
        settings.apply(&mut behavior).unwrap();
        assert_eq!(
            behavior.toolbar().toolbar().unwrap(),
            Toolbar::Preset(ToolbarPreset::Basic)
        );
    }

    #[test]
    fn invalid_value_leaves_behavior_untouched() {
        let settings =
            EditorSettings::from_json_str(r#"{"language": "fr", "height": "tall"}"#).unwrap();
        let mut behavior = CkEditorBehavior::new();
        assert!(matches!(
            settings.apply(&mut behavior),
            Err(EditorError::InvalidValue(_))
        ));
        assert!(behavior.options().is_empty());
    }

    #[test]
    fn malformed_json_is_a_settings_error() {
        assert!(matches!(
            EditorSettings::from_json_str(r#"{"height": 300}"#),
            Err(EditorError::Settings(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"skin": "kama", "undo_stack_size": 5}}"#).unwrap();
        let settings = EditorSettings::from_path(file.path()).unwrap();
        assert_eq!(settings.skin.as_deref(), Some("kama"));
        assert_eq!(settings.undo_stack_size, Some(5));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            EditorSettings::from_path(dir.path().join("absent.json")),
            Err(EditorError::Io(_))
        ));
    }
}
