use crate::error::Result;
use crate::options::Options;

const BROWSE_URL: &str = "filebrowserBrowseUrl";
const FLASH_BROWSE_URL: &str = "filebrowserFlashBrowseUrl";
const FLASH_UPLOAD_URL: &str = "filebrowserFlashUploadUrl";
const IMAGE_BROWSE_LINK_URL: &str = "filebrowserImageBrowseLinkUrl";
const IMAGE_BROWSE_URL: &str = "filebrowserImageBrowseUrl";
const IMAGE_UPLOAD_URL: &str = "filebrowserImageUploadUrl";
const UPLOAD_URL: &str = "filebrowserUploadUrl";

facet! {
    /// Server-side file browser and upload endpoints. Every URL defaults to
    /// an empty string, which hides the matching button.
    FileBrowserFacet
}

impl FileBrowserFacet<'_> {
    pub fn browse_url(&self) -> Result<String> {
        self.options.literal_or(BROWSE_URL, "")
    }

    pub fn set_browse_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.options.put_literal(BROWSE_URL, url);
        self
    }

    pub fn flash_browse_url(&self) -> Result<String> {
        self.options.literal_or(FLASH_BROWSE_URL, "")
    }

    pub fn set_flash_browse_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.options.put_literal(FLASH_BROWSE_URL, url);
        self
    }

    pub fn flash_upload_url(&self) -> Result<String> {
        self.options.literal_or(FLASH_UPLOAD_URL, "")
    }

    pub fn set_flash_upload_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.options.put_literal(FLASH_UPLOAD_URL, url);
        self
    }

    /// Browser opened from the link tab of the image dialog.
    pub fn image_browse_link_url(&self) -> Result<String> {
        self.options.literal_or(IMAGE_BROWSE_LINK_URL, "")
    }

    pub fn set_image_browse_link_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.options.put_literal(IMAGE_BROWSE_LINK_URL, url);
        self
    }

    pub fn image_browse_url(&self) -> Result<String> {
        self.options.literal_or(IMAGE_BROWSE_URL, "")
    }

    pub fn set_image_browse_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.options.put_literal(IMAGE_BROWSE_URL, url);
        self
    }

    pub fn image_upload_url(&self) -> Result<String> {
        self.options.literal_or(IMAGE_UPLOAD_URL, "")
    }

    pub fn set_image_upload_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.options.put_literal(IMAGE_UPLOAD_URL, url);
        self
    }

    pub fn upload_url(&self) -> Result<String> {
        self.options.literal_or(UPLOAD_URL, "")
    }

    pub fn set_upload_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.options.put_literal(UPLOAD_URL, url);
        self
    }
}
