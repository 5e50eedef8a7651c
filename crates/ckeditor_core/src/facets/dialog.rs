use crate::error::Result;
use crate::options::Options;

const BACKGROUND_COVER_COLOR: &str = "dialog_backgroundCoverColor";
const BACKGROUND_COVER_OPACITY: &str = "dialog_backgroundCoverOpacity";
const MAGNET_DISTANCE: &str = "dialog_magnetDistance";
const STARTUP_FOCUS_TAB: &str = "dialog_startupFocusTab";

facet! {
    /// Dialog window appearance.
    DialogFacet
}

impl DialogFacet<'_> {
    /// Color of the page cover behind an open dialog. Defaults to `white`.
    pub fn background_cover_color(&self) -> Result<String> {
        self.options.literal_or(BACKGROUND_COVER_COLOR, "white")
    }

    pub fn set_background_cover_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.options.put_literal(BACKGROUND_COVER_COLOR, color);
        self
    }

    /// Opacity of the cover, from 0 to 1. Defaults to `0.5`.
    pub fn background_cover_opacity(&self) -> Result<f64> {
        self.options.float_or(BACKGROUND_COVER_OPACITY, 0.5)
    }

    pub fn set_background_cover_opacity(&mut self, opacity: f64) -> &mut Self {
        self.options.put(BACKGROUND_COVER_OPACITY, opacity);
        self
    }

    /// Distance in pixels at which a dragged dialog snaps to the viewport edge.
    pub fn magnet_distance(&self) -> Result<i64> {
        self.options.int_or(MAGNET_DISTANCE, 20)
    }

    pub fn set_magnet_distance(&mut self, distance: i64) -> &mut Self {
        self.options.put(MAGNET_DISTANCE, distance);
        self
    }

    pub fn startup_focus_tab(&self) -> Result<bool> {
        self.options.boolean_or(STARTUP_FOCUS_TAB, false)
    }

    pub fn set_startup_focus_tab(&mut self, focus: bool) -> &mut Self {
        self.options.put(STARTUP_FOCUS_TAB, focus);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ToJs;

    #[test]
    fn defaults() {
        let mut options = Options::new();
        let dialog = DialogFacet::new(&mut options);
        assert_eq!(dialog.background_cover_color().unwrap(), "white");
        assert_eq!(dialog.background_cover_opacity().unwrap(), 0.5);
        assert_eq!(dialog.magnet_distance().unwrap(), 20);
        assert!(!dialog.startup_focus_tab().unwrap());
        assert!(options.is_empty());
    }

    #[test]
    fn setters_chain_and_write_through() {
        let mut options = Options::new();
        DialogFacet::new(&mut options)
            .set_background_cover_color("black")
            .set_background_cover_opacity(0.8)
            .set_magnet_distance(5)
            .set_startup_focus_tab(true);

        let dialog = DialogFacet::new(&mut options);
        assert_eq!(dialog.background_cover_color().unwrap(), "black");
        assert_eq!(dialog.background_cover_opacity().unwrap(), 0.8);
        assert_eq!(dialog.magnet_distance().unwrap(), 5);
        assert!(dialog.startup_focus_tab().unwrap());
        assert_eq!(
            options.to_js(),
            "{dialog_backgroundCoverColor: 'black', dialog_backgroundCoverOpacity: 0.8, \
             dialog_magnetDistance: 5, dialog_startupFocusTab: true}"
        );
    }
}
