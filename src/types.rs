//! Type-safe enums shared across poimap
//!
//! These replace bare strings where the set of values is closed: coarse POI
//! categories and the views a route can render.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Coarse point-of-interest category.
///
/// Many OSM category words collapse onto one category (`bar` and `pub` are
/// both [`PoiCategory::Bar`]). Words with no dedicated category map to
/// [`PoiCategory::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    Bar,
    Parking,
    Billiards,
    #[default]
    Unknown,
}

impl PoiCategory {
    /// Classify a single category word.
    pub fn classify(word: &str) -> Self {
        match word {
            "bar" | "pub" => Self::Bar,
            "parking" => Self::Parking,
            "billiards" => Self::Billiards,
            _ => Self::Unknown,
        }
    }

    /// First known category among `words`, in order.
    pub fn classify_all<S: AsRef<str>>(words: &[S]) -> Self {
        words
            .iter()
            .map(|w| Self::classify(w.as_ref()))
            .find(|c| *c != Self::Unknown)
            .unwrap_or(Self::Unknown)
    }
}

/// Front-end view a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Landing page with the map
    Home,
    /// Score page
    Score,
    /// Single point-of-interest page, keyed by the `:poi` path segment
    Poi,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_classify_bar_and_pub() {
        assert_eq!(PoiCategory::classify("bar"), PoiCategory::Bar);
        assert_eq!(PoiCategory::classify("pub"), PoiCategory::Bar);
    }

    #[test]
    fn test_classify_other_known() {
        assert_eq!(PoiCategory::classify("parking"), PoiCategory::Parking);
        assert_eq!(PoiCategory::classify("billiards"), PoiCategory::Billiards);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(PoiCategory::classify("cafe"), PoiCategory::Unknown);
        assert_eq!(PoiCategory::classify(""), PoiCategory::Unknown);
        // Case sensitive, like the icon catalog
        assert_eq!(PoiCategory::classify("Bar"), PoiCategory::Unknown);
    }

    #[test]
    fn test_classify_all_skips_unknown() {
        assert_eq!(
            PoiCategory::classify_all(&["cafe", "billiards", "bar"]),
            PoiCategory::Billiards
        );
        assert_eq!(PoiCategory::classify_all(&["cafe"]), PoiCategory::Unknown);
        assert_eq!(
            PoiCategory::classify_all::<&str>(&[]),
            PoiCategory::Unknown
        );
    }

    #[test]
    fn test_category_strings() {
        assert_eq!(PoiCategory::Bar.to_string(), "bar");
        assert_eq!("parking".parse::<PoiCategory>().unwrap(), PoiCategory::Parking);
        assert!("pub".parse::<PoiCategory>().is_err());
    }

    #[test]
    fn test_view_strings() {
        let names: Vec<String> = View::iter().map(|v| v.to_string()).collect();
        assert_eq!(names, vec!["home", "score", "poi"]);
    }

    #[test]
    fn test_view_serde() {
        let json = serde_json::to_string(&View::Score).unwrap();
        assert_eq!(json, "\"score\"");
        let view: View = serde_json::from_str("\"poi\"").unwrap();
        assert_eq!(view, View::Poi);
    }
}
