use crate::error::Result;
use crate::options::{Options, Toolbar, ToolbarLocation};

const TOOLBAR: &str = "toolbar";
const TOOLBAR_CAN_COLLAPSE: &str = "toolbarCanCollapse";
const TOOLBAR_LOCATION: &str = "toolbarLocation";

facet! {
    /// Toolbar layout and placement.
    ToolbarFacet
}

impl ToolbarFacet<'_> {
    /// The `Full` preset unless a layout was set.
    pub fn toolbar(&self) -> Result<Toolbar> {
        self.options.complex_or_else(TOOLBAR, Toolbar::default)
    }

    pub fn set_toolbar(&mut self, toolbar: Toolbar) -> &mut Self {
        self.options.put(TOOLBAR, toolbar);
        self
    }

    pub fn can_collapse(&self) -> Result<bool> {
        self.options.boolean_or(TOOLBAR_CAN_COLLAPSE, true)
    }

    pub fn set_can_collapse(&mut self, can_collapse: bool) -> &mut Self {
        self.options.put(TOOLBAR_CAN_COLLAPSE, can_collapse);
        self
    }

    pub fn location(&self) -> Result<ToolbarLocation> {
        self.options
            .complex_or_else(TOOLBAR_LOCATION, || ToolbarLocation::Top)
    }

    pub fn set_location(&mut self, location: ToolbarLocation) -> &mut Self {
        self.options.put(TOOLBAR_LOCATION, location);
        self
    }
}
