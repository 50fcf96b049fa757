//! Icon Resolver
//!
//! Maps point-of-interest category words to icon identifiers.
//!
//! # Design
//!
//! - **Single table**: All icons come from an [`IconCatalog`] owned by the resolver
//! - **Explicit absence**: An unknown word without defaulting is `None`, never a sentinel
//! - **Pure logic**: No I/O, no side effects; safe to share across threads
//!
//! # Resolution Rules
//!
//! | Operation           | Unknown input            |
//! |---------------------|--------------------------|
//! | `by_name(w, false)` | `None`                   |
//! | `by_name(w, true)`  | Default icon             |
//! | `by_kind(words)`    | Default icon             |
//! | `by_kind([])`       | `InvalidArgument` error  |

use tracing::{debug, trace};

use crate::catalog::IconCatalog;
use crate::error::{PoiMapError, Result};
use crate::tags::PoiFeature;

/// Resolves category words to icon identifiers.
#[derive(Debug, Clone, Default)]
pub struct IconResolver {
    catalog: IconCatalog,
}

impl IconResolver {
    pub fn new(catalog: IconCatalog) -> Self {
        Self { catalog }
    }

    /// Resolver over the built-in icon table.
    pub fn builtin() -> Self {
        Self::new(IconCatalog::builtin())
    }

    pub fn catalog(&self) -> &IconCatalog {
        &self.catalog
    }

    /// Icon for a single category word.
    ///
    /// Falls back to the default icon only when `use_default` is set;
    /// otherwise an unknown word yields `None`.
    pub fn by_name(&self, word: &str, use_default: bool) -> Option<&str> {
        match self.catalog.get(word) {
            Some(icon) => Some(icon),
            None if use_default => Some(self.catalog.default_icon()),
            None => None,
        }
    }

    /// Icon for an ordered list of candidate words.
    ///
    /// Returns the icon of the first word, in list order, that the catalog
    /// knows. When none match, the default icon is returned.
    ///
    /// # Errors
    ///
    /// Returns `PoiMapError::InvalidArgument` if `words` is empty.
    pub fn by_kind<S: AsRef<str>>(&self, words: &[S]) -> Result<&str> {
        let Some(first) = words.first() else {
            return Err(PoiMapError::invalid_argument(
                "cannot resolve an icon from an empty candidate list",
            ));
        };

        if let Some(icon) = words.iter().find_map(|w| self.by_name(w.as_ref(), false)) {
            trace!(icon, "matched candidate word");
            return Ok(icon);
        }

        let first: &str = first.as_ref();
        debug!(
            first,
            candidates = words.len(),
            "no candidate matched, using default icon"
        );
        // Cannot be None: the catalog always holds a default entry
        Ok(self
            .by_name(first, true)
            .unwrap_or_else(|| self.catalog.default_icon()))
    }

    /// Icon for a map feature.
    ///
    /// A feature with no category words gets the default icon.
    pub fn icon_for_feature(&self, feature: &PoiFeature) -> &str {
        if feature.kind.is_empty() {
            return self.catalog.default_icon();
        }
        self.by_kind(&feature.kind)
            .unwrap_or_else(|_| self.catalog.default_icon())
    }
}

// ============================================================================
// Tests
// ============================================================================
