#![forbid(unsafe_code)]

//! Category filter for the project grid.
//!
//! Filtering works on the tiles already on the page, by their category tag.
//! It never consults the catalog.

use core::fmt;

/// Tag that selects every tile.
pub const ALL_CATEGORIES: &str = "all";

/// Active filter of the project grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every tile.
    #[default]
    All,
    /// Show tiles whose tag equals this value exactly.
    Category(String),
}

impl CategoryFilter {
    /// Build from a filter button's tag. `"all"` selects everything.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(tag.to_owned())
        }
    }

    /// Tag of the filter button this filter corresponds to.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(tag) => tag,
        }
    }

    /// Whether a tile with `tile_tag` stays visible. Untagged tiles only show
    /// under [`CategoryFilter::All`].
    #[must_use]
    pub fn matches(&self, tile_tag: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => tile_tag == Some(tag.as_str()),
        }
    }

    /// Visibility of each tile, in tile order.
    #[must_use]
    pub fn visibility<'a, I>(&self, tiles: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        tiles.into_iter().map(|tag| self.matches(tag)).collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
