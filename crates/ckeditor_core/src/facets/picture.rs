use super::literal_list;
use crate::defaults;
use crate::error::Result;
use crate::options::Options;

const IMAGE_PREVIEW_TEXT: &str = "image_previewText";
const IMAGE_REMOVE_LINK_BY_EMPTY_URL: &str = "image_removeLinkByEmptyURL";
const SMILEY_PATH: &str = "smiley_path";
const SMILEY_IMAGES: &str = "smiley_images";
const SMILEY_DESCRIPTIONS: &str = "smiley_descriptions";

facet! {
    /// Image dialog and smiley plugin.
    PictureFacet
}

impl PictureFacet<'_> {
    /// Filler text shown around the image preview.
    pub fn image_preview_text(&self) -> Result<String> {
        self.options
            .literal_or(IMAGE_PREVIEW_TEXT, "Lorem ipsum dolor...")
    }

    pub fn set_image_preview_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.options.put_literal(IMAGE_PREVIEW_TEXT, text);
        self
    }

    pub fn image_remove_link_by_empty_url(&self) -> Result<bool> {
        self.options
            .boolean_or(IMAGE_REMOVE_LINK_BY_EMPTY_URL, true)
    }

    pub fn set_image_remove_link_by_empty_url(&mut self, remove: bool) -> &mut Self {
        self.options.put(IMAGE_REMOVE_LINK_BY_EMPTY_URL, remove);
        self
    }

    /// Base URL the smiley images are loaded from.
    pub fn smiley_path(&self) -> Result<String> {
        self.options.literal_or(SMILEY_PATH, "/images/smileys/")
    }

    pub fn set_smiley_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.options.put_literal(SMILEY_PATH, path);
        self
    }

    /// Image file names, relative to [`smiley_path`](Self::smiley_path).
    pub fn smiley_images(&self) -> Result<Vec<String>> {
        self.options
            .list_or_else(SMILEY_IMAGES, defaults::smiley_images)
    }

    pub fn set_smiley_images<I, S>(&mut self, images: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.put(SMILEY_IMAGES, literal_list(images));
        self
    }

    /// Tooltips paired by position with [`smiley_images`](Self::smiley_images).
    pub fn smiley_descriptions(&self) -> Result<Vec<String>> {
        self.options
            .list_or_else(SMILEY_DESCRIPTIONS, defaults::smiley_descriptions)
    }

    pub fn set_smiley_descriptions<I, S>(&mut self, descriptions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .put(SMILEY_DESCRIPTIONS, literal_list(descriptions));
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
        let picture = PictureFacet::new(&mut options);
        assert_eq!(picture.image_preview_text().unwrap(), "Lorem ipsum dolor...");
        assert!(picture.image_remove_link_by_empty_url().unwrap());
        assert_eq!(picture.smiley_path().unwrap(), "/images/smileys/");

        let images = picture.smiley_images().unwrap();
        let descriptions = picture.smiley_descriptions().unwrap();
        assert_eq!(images.len(), 21);
        assert_eq!(descriptions.len(), 21);
        assert_eq!(images[18], "broken_heart.gif");
        assert_eq!(descriptions[18], "broken heart");
    }

    #[test]
    fn smiley_images_are_stored_as_their_own_option() {
        let mut options = Options::new();
        let mut picture = PictureFacet::new(&mut options);
        picture
            .set_smiley_path("/static/smileys/")
            .set_smiley_images(["a.gif", "b.gif"])
            .set_smiley_descriptions(["a", "b"]);
        assert_eq!(picture.smiley_path().unwrap(), "/static/smileys/");
        assert_eq!(picture.smiley_images().unwrap(), vec!["a.gif", "b.gif"]);
        assert_eq!(
            options.to_js(),
            "{smiley_path: '/static/smileys/', smiley_images: ['a.gif','b.gif'], \
             smiley_descriptions: ['a','b']}"
        );
    }

    #[test]
    fn preview_text_is_escaped() {
        let mut options = Options::new();
        PictureFacet::new(&mut options).set_image_preview_text("it's");
        assert_eq!(options.to_js(), r"{image_previewText: 'it\'s'}");
    }

    #[test]
    fn remove_link_by_empty_url_round_trip() {
        let mut options = Options::new();
        let mut picture = PictureFacet::new(&mut options);
        picture.set_image_remove_link_by_empty_url(false);
        assert!(!picture.image_remove_link_by_empty_url().unwrap());
        assert_eq!(options.to_js(), "{image_removeLinkByEmptyURL: false}");
    }
}
