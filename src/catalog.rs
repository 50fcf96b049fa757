//! Icon catalog: the keyword → icon table behind the resolver.
//!
//! Icon names follow the Material Design Icons font (`mdi-*`). The catalog
//! does not check that a name exists in the font; the front end owns that.
//!
//! # Built-in Table
//!
//! | Keyword          | Icon                 |
//! |------------------|----------------------|
//! | `default`        | `mdi-domain`         |
//! | `pub`, `bar`     | `mdi-glass-cocktail` |
//! | `billiards`      | `mdi-billiards`      |
//! | `curloc`         | `mdi-crosshairs`     |
//! | `bicycle`        | `mdi-bicycle`        |
//! | `toilets`        | `mdi-toilet`         |
//! | `drinking_water` | `mdi-water-pump`     |
//! | `post_box`       | `mdi-post`           |
//! | `hotel`          | `mdi-hotel`          |

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{PoiMapError, Result};

/// Reserved keyword whose icon is returned when nothing else matches.
pub const DEFAULT_KEY: &str = "default";

/// Built-in keyword → icon table.
pub const BUILTIN_ICONS: &[(&str, &str)] = &[
    (DEFAULT_KEY, "mdi-domain"),
    ("pub", "mdi-glass-cocktail"),
    ("bar", "mdi-glass-cocktail"),
    ("billiards", "mdi-billiards"),
    // Marker for the user's current location, not an OSM category
    ("curloc", "mdi-crosshairs"),
    ("bicycle", "mdi-bicycle"),
    ("toilets", "mdi-toilet"),
    ("drinking_water", "mdi-water-pump"),
    ("post_box", "mdi-post"),
    ("hotel", "mdi-hotel"),
];

/// Immutable keyword → icon mapping.
///
/// # Invariants
///
/// - `DEFAULT_KEY` is always present, so a defaulted lookup never fails
/// - No mutation after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCatalog {
    icons: BTreeMap<String, String>,
}

impl IconCatalog {
    /// Catalog built from [`BUILTIN_ICONS`].
    pub fn builtin() -> Self {
        Self {
            icons: BUILTIN_ICONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Build a catalog from arbitrary entries.
    ///
    /// Later entries win over earlier ones with the same keyword.
    ///
    /// # Errors
    ///
    /// Returns `PoiMapError::Config` if no `DEFAULT_KEY` entry is supplied,
    /// or if any icon is blank.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let icons: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if !icons.contains_key(DEFAULT_KEY) {
            return Err(PoiMapError::config(format!(
                "icon catalog must contain a '{}' entry",
                DEFAULT_KEY
            )));
        }

        if let Some((keyword, _)) = icons.iter().find(|(_, icon)| icon.trim().is_empty()) {
            return Err(PoiMapError::config(format!(
                "icon for keyword {:?} cannot be blank",
                keyword
            )));
        }

        debug!(entries = icons.len(), "icon catalog constructed");
        Ok(Self { icons })
    }

    /// Icon for `keyword`, if the catalog has one.
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.icons.get(keyword).map(String::as_str)
    }

    /// The icon used when nothing else matches.
    pub fn default_icon(&self) -> &str {
        // Guaranteed by every constructor
        self.icons
            .get(DEFAULT_KEY)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.icons.contains_key(keyword)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Entries in keyword order, `DEFAULT_KEY` included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.icons.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
