//! Map-feature tags and the category words derived from them.
//!
//! Map features carry OSM-style `key=value` tags. The values of a handful of
//! keys describe what the place *is*; those values are the candidate words
//! handed to the icon resolver, in tag order.

use serde::{Deserialize, Serialize};

use crate::types::PoiCategory;

/// Tag keys whose values name a point-of-interest category.
pub const POI_TAG_KEYS: &[&str] = &[
    "amenity",
    "shop",
    "leisure",
    "sport",
    "tourism",
    "information",
    "natural",
];

/// One `key=value` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub k: String,
    pub v: String,
}

impl Tag {
    pub fn new(k: impl Into<String>, v: impl Into<String>) -> Self {
        Self {
            k: k.into(),
            v: v.into(),
        }
    }
}

/// Category words carried by `tags`, in tag order.
///
/// Duplicates are kept; the resolver only cares about the first match.
pub fn poi_kinds(tags: &[Tag]) -> Vec<String> {
    tags.iter()
        .filter(|tag| POI_TAG_KEYS.contains(&tag.k.as_str()))
        .map(|tag| tag.v.clone())
        .collect()
}

/// Whether `tags` describe a point of interest at all.
pub fn is_poi(tags: &[Tag]) -> bool {
    tags.iter().any(|tag| POI_TAG_KEYS.contains(&tag.k.as_str()))
}

fn tag_value<'a>(tags: &'a [Tag], key: &str) -> Option<&'a str> {
    tags.iter().find(|tag| tag.k == key).map(|tag| tag.v.as_str())
}

/// A point of interest as the map front end receives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiFeature {
    pub node_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub lat: f64,
    pub lon: f64,
    /// Candidate category words, most specific first
    #[serde(default)]
    pub kind: Vec<String>,
    #[serde(default)]
    pub wheelchair: Option<bool>,
}

impl PoiFeature {
    /// Build a feature description from a node's raw tags.
    ///
    /// The address is only filled in when house number, street and city are
    /// all present.
    pub fn from_tags(node_id: i64, lat: f64, lon: f64, tags: &[Tag]) -> Self {
        let address = ["addr:housenumber", "addr:street", "addr:city"]
            .iter()
            .map(|key| tag_value(tags, key))
            .collect::<Option<Vec<&str>>>()
            .map(|parts| parts.join(" "));

        Self {
            node_id,
            name: tag_value(tags, "name").map(str::to_string),
            address,
            lat,
            lon,
            kind: poi_kinds(tags),
            wheelchair: tag_value(tags, "wheelchair").map(|v| v == "yes"),
        }
    }

    /// Coarse category of this feature.
    pub fn category(&self) -> PoiCategory {
        PoiCategory::classify_all(&self.kind)
    }
}
