//! Typed, defaulted views over subsets of one editor's options.
//!
//! A facet borrows the behavior's [`Options`](crate::options::Options) mutably and holds nothing
//! else. Getters return the stored value or the facet's default when the
//! option is absent; setters write straight through and return the facet
//! so calls can be chained.

use crate::options::{ListItem, OptionValue};

macro_rules! facet {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<'a> {
            options: &'a mut Options,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(options: &'a mut Options) -> Self {
                Self { options }
            }
        }
    };
}

mod dialog;
mod file_browser;
mod font;
mod format;
mod locale;
mod paste;
mod picture;
mod size;
mod style_sheet;
mod toolbar;

pub use dialog::DialogFacet;
pub use file_browser::FileBrowserFacet;
pub use font::FontFacet;
pub use format::FormatFacet;
pub use locale::LocaleFacet;
pub use paste::PasteFacet;
pub use picture::PictureFacet;
pub use size::SizeFacet;
pub use style_sheet::StyleSheetFacet;
pub use toolbar::ToolbarFacet;

/// List of quoted strings, as used by `contentsCss` or `smiley_images`.
fn literal_list<I, S>(items: I) -> OptionValue
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OptionValue::List(
        items
            .into_iter()
            .map(|item| ListItem::Literal(item.into()))
            .collect(),
    )
}
