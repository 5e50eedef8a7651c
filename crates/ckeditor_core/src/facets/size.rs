use crate::error::Result;
use crate::options::{Options, SizeOption};

const HEIGHT: &str = "height";
const WIDTH: &str = "width";
const RESIZE_ENABLED: &str = "resize_enabled";
const RESIZE_MAX_HEIGHT: &str = "resize_maxHeight";
const RESIZE_MAX_WIDTH: &str = "resize_maxWidth";
const DISABLE_OBJECT_RESIZING: &str = "disableObjectResizing";
const FULL_PAGE: &str = "fullPage";

facet! {
    /// Editor dimensions and resizing.
    SizeFacet
}

impl SizeFacet<'_> {
    /// Height of the editing area. Defaults to `200px`.
    pub fn height(&self) -> Result<SizeOption> {
        self.options
            .complex_or_else(HEIGHT, || SizeOption::pixels(200))
    }

    pub fn set_height(&mut self, height: SizeOption) -> &mut Self {
        self.options.put(HEIGHT, height);
        self
    }

    /// `None` lets the editor fill its container.
    pub fn width(&self) -> Result<Option<SizeOption>> {
        self.options.complex(WIDTH)
    }

    pub fn set_width(&mut self, width: SizeOption) -> &mut Self {
        self.options.put(WIDTH, width);
        self
    }

    pub fn resize_enabled(&self) -> Result<bool> {
        self.options.boolean_or(RESIZE_ENABLED, true)
    }

    pub fn set_resize_enabled(&mut self, enabled: bool) -> &mut Self {
        self.options.put(RESIZE_ENABLED, enabled);
        self
    }

    pub fn resize_max_height(&self) -> Result<i64> {
        self.options.int_or(RESIZE_MAX_HEIGHT, 3000)
    }

    pub fn set_resize_max_height(&mut self, pixels: i64) -> &mut Self {
        self.options.put(RESIZE_MAX_HEIGHT, pixels);
        self
    }

    pub fn resize_max_width(&self) -> Result<i64> {
        self.options.int_or(RESIZE_MAX_WIDTH, 3000)
    }

    pub fn set_resize_max_width(&mut self, pixels: i64) -> &mut Self {
        self.options.put(RESIZE_MAX_WIDTH, pixels);
        self
    }

    pub fn disable_object_resizing(&self) -> Result<bool> {
        self.options.boolean_or(DISABLE_OBJECT_RESIZING, false)
    }

    pub fn set_disable_object_resizing(&mut self, disable: bool) -> &mut Self {
        self.options.put(DISABLE_OBJECT_RESIZING, disable);
        self
    }

    /// Edit a full HTML page instead of a body fragment.
    pub fn full_page(&self) -> Result<bool> {
        self.options.boolean_or(FULL_PAGE, false)
    }

    pub fn set_full_page(&mut self, full_page: bool) -> &mut Self {
        self.options.put(FULL_PAGE, full_page);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{SizeMetric, ToJs};

    #[test]
    fn defaults() {
        let mut options = Options::new();
        let size = SizeFacet::new(&mut options);
        let height = size.height().unwrap();
        assert_eq!(height.value(), 200);
        assert_eq!(height.metric(), SizeMetric::Pixel);
        assert_eq!(size.width().unwrap(), None);
        assert!(size.resize_enabled().unwrap());
        assert_eq!(size.resize_max_height().unwrap(), 3000);
        assert_eq!(size.resize_max_width().unwrap(), 3000);
        assert!(!size.disable_object_resizing().unwrap());
        assert!(!size.full_page().unwrap());
    }

    #[test]
    fn sizes_render_with_metric() {
        let mut options = Options::new();
        SizeFacet::new(&mut options)
            .set_height(SizeOption::pixels(200))
            .set_width(SizeOption::percent(50));
        assert_eq!(options.to_js(), "{height: '200px', width: '50%'}");
    }

    #[test]
    fn round_trip() {
        let mut options = Options::new();
        let mut size = SizeFacet::new(&mut options);
        size.set_height(SizeOption::em(20))
            .set_resize_enabled(false)
            .set_resize_max_height(800)
            .set_resize_max_width(1200)
            .set_disable_object_resizing(true)
            .set_full_page(true);
        assert_eq!(size.height().unwrap(), SizeOption::em(20));
        assert!(!size.resize_enabled().unwrap());
        assert_eq!(size.resize_max_height().unwrap(), 800);
        assert_eq!(size.resize_max_width().unwrap(), 1200);
        assert!(size.disable_object_resizing().unwrap());
        assert!(size.full_page().unwrap());
    }
}
