//! Toolbar layout: button labels, groups of clusters, and presets.

use super::ToJs;
use crate::error::EditorError;
use crate::js;
use std::str::FromStr;

macro_rules! toolbar_buttons {
    ($($variant:ident => $label:literal,)+) => {
        /// A toolbar entry. Standard buttons map to fixed labels through a
        /// lookup table; [`ToolbarItem::Custom`] covers plugin buttons.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum ToolbarItem {
            $($variant,)+
            /// Vertical rule between buttons of one cluster (`-`).
            Separator,
            /// Any other button name registered by a plugin.
            Custom(String),
        }

        impl ToolbarItem {
            const STANDARD: &'static [ToolbarItem] = &[$(ToolbarItem::$variant,)+];

            /// Label the client editor knows the button by.
            pub fn label(&self) -> &str {
                match self {
                    $(ToolbarItem::$variant => $label,)+
                    ToolbarItem::Separator => "-",
                    ToolbarItem::Custom(label) => label.as_str(),
                }
            }
        }
    };
}

toolbar_buttons! {
    About => "About",
    Anchor => "Anchor",
    BgColor => "BGColor",
    Blockquote => "Blockquote",
    Bold => "Bold",
    BulletedList => "BulletedList",
    Button => "Button",
    Checkbox => "Checkbox",
    Copy => "Copy",
    Cut => "Cut",
    Find => "Find",
    Flash => "Flash",
    Font => "Font",
    FontSize => "FontSize",
    Form => "Form",
    Format => "Format",
    HiddenField => "HiddenField",
    HorizontalRule => "HorizontalRule",
    Image => "Image",
    ImageButton => "ImageButton",
    Indent => "Indent",
    Italic => "Italic",
    Link => "Link",
    Maximize => "Maximize",
    NewPage => "NewPage",
    NumberedList => "NumberedList",
    Outdent => "Outdent",
    PageBreak => "PageBreak",
    Paste => "Paste",
    PasteFromWord => "PasteFromWord",
    PasteText => "PasteText",
    Preview => "Preview",
    Print => "Print",
    Radio => "Radio",
    Redo => "Redo",
    Replace => "Replace",
    RemoveFormat => "RemoveFormat",
    Save => "Save",
    Scayt => "Scayt",
    Select => "Select",
    SelectAll => "SelectAll",
    ShowBlocks => "ShowBlocks",
    Smiley => "Smiley",
    Source => "Source",
    SpecialChar => "SpecialChar",
    SpellChecker => "SpellChecker",
    Strike => "Strike",
    Styles => "Styles",
    Subscript => "Subscript",
    Superscript => "Superscript",
    Table => "Table",
    Templates => "Templates",
    Textarea => "Textarea",
    TextColor => "TextColor",
    TextField => "TextField",
    Underline => "Underline",
    Undo => "Undo",
    Unlink => "Unlink",
}

impl ToolbarItem {
    /// Resolve a label to a standard button, falling back to `Custom`.
    pub fn from_label(label: &str) -> Self {
        if label == "-" {
            return ToolbarItem::Separator;
        }
        Self::STANDARD
            .iter()
            .find(|item| item.label() == label)
            .cloned()
            .unwrap_or_else(|| ToolbarItem::Custom(label.to_string()))
    }
}

/// Rows of the toolbar are made of groups; each group holds clusters of
/// buttons that are drawn together.
///
/// A group renders as its clusters joined by commas, without enclosing
/// brackets: `['Bold','Italic'],['Link']`. The enclosing [`Toolbar`] adds
/// the outer array and the row breaks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolbarGroup {
    clusters: Vec<Vec<ToolbarItem>>,
}

impl ToolbarGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cluster and return the group for chaining.
    pub fn cluster<I: IntoIterator<Item = ToolbarItem>>(mut self, items: I) -> Self {
        self.clusters.push(items.into_iter().collect());
        self
    }

    pub fn push(&mut self, cluster: Vec<ToolbarItem>) {
        self.clusters.push(cluster);
    }

    pub fn clusters(&self) -> &[Vec<ToolbarItem>] {
        &self.clusters
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

fn render_cluster(cluster: &[ToolbarItem]) -> String {
    js::array(cluster.iter().map(|item| js::quotes(item.label())))
}

impl ToJs for ToolbarGroup {
    fn to_js(&self) -> String {
        self.clusters
            .iter()
            .map(|cluster| render_cluster(cluster))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Toolbar sets shipped with the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarPreset {
    Basic,
    Full,
}

impl ToolbarPreset {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolbarPreset::Basic => "Basic",
            ToolbarPreset::Full => "Full",
        }
    }
}

impl FromStr for ToolbarPreset {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(ToolbarPreset::Basic),
            "full" => Ok(ToolbarPreset::Full),
            _ => Err(EditorError::InvalidValue(format!(
                "unknown toolbar preset '{}'",
                s
            ))),
        }
    }
}

/// The `toolbar` option: a named preset or an explicit layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toolbar {
    Preset(ToolbarPreset),
    Groups(Vec<ToolbarGroup>),
}

impl Default for Toolbar {
    fn default() -> Self {
        Toolbar::Preset(ToolbarPreset::Full)
    }
}

impl ToJs for Toolbar {
    /// Groups are separated by a single `'/'` row break. Empty groups are
    /// skipped so they never produce a dangling separator.
    fn to_js(&self) -> String {
        match self {
            Toolbar::Preset(preset) => js::quotes(preset.as_str()),
            Toolbar::Groups(groups) => {
                let rows = groups
                    .iter()
                    .filter(|group| !group.is_empty())
                    .map(ToJs::to_js)
                    .collect::<Vec<_>>();
                format!("[{}]", rows.join(",'/',"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ToolbarItem::*;
    use super::*;

    fn basic_styles() -> ToolbarGroup {
        ToolbarGroup::new()
            .cluster([Bold, Italic])
            .cluster([Link])
    }

    #[test]
    fn group_renders_clusters_without_row_break() {
        assert_eq!(basic_styles().to_js(), "['Bold','Italic'],['Link']");
    }

    #[test]
    fn toolbar_interleaves_single_row_breaks() {
        let second = ToolbarGroup::new().cluster([Source, Separator, Undo]);
        let toolbar = Toolbar::Groups(vec![basic_styles(), second]);
        let rendered = toolbar.to_js();
        assert_eq!(
            rendered,
            "[['Bold','Italic'],['Link'],'/',['Source','-','Undo']]"
        );
        assert_eq!(rendered.matches("'/'").count(), 1);
        assert!(!rendered.starts_with("['/'"));
        assert!(!rendered.ends_with("'/']"));
    }

    #[test]
    fn zero_groups_render_empty_array() {
        assert_eq!(Toolbar::Groups(Vec::new()).to_js(), "[]");
    }

    #[test]
    fn empty_groups_do_not_add_separators() {
        let toolbar = Toolbar::Groups(vec![ToolbarGroup::new(), basic_styles(), ToolbarGroup::new()]);
        assert_eq!(toolbar.to_js(), "[['Bold','Italic'],['Link']]");
    }

    #[test]
    fn empty_cluster_renders_as_empty_array() {
        let group = ToolbarGroup::new().cluster([Bold]).cluster(Vec::new());
        assert_eq!(group.to_js(), "['Bold'],[]");
        let toolbar = Toolbar::Groups(vec![group]);
        assert_eq!(toolbar.to_js(), "[['Bold'],[]]");
    }

    #[test]
    fn presets_render_quoted_names() {
        assert_eq!(Toolbar::default().to_js(), "'Full'");
        assert_eq!(Toolbar::Preset(ToolbarPreset::Basic).to_js(), "'Basic'");
    }

    #[test]
    fn labels_resolve_to_standard_buttons() {
        assert_eq!(ToolbarItem::from_label("BGColor"), BgColor);
        assert_eq!(ToolbarItem::from_label("-"), Separator);
        assert_eq!(
            ToolbarItem::from_label("CodeSnippet"),
            Custom("CodeSnippet".to_string())
        );
    }
}
