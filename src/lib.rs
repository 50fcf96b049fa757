//! poimap library
//!
//! Icon resolution for point-of-interest category words, plus the small
//! pieces of front-end logic around it: hostname route tables, feature tag
//! extraction and catalog configuration files.

pub mod catalog;
pub mod cli;
pub mod config_file;
pub mod error;
pub mod logic;
pub mod tags;
pub mod types;

// Re-export main types for convenience
pub use catalog::{BUILTIN_ICONS, DEFAULT_KEY, IconCatalog};
pub use config_file::CatalogConfig;
pub use error::{PoiMapError, Result};
pub use logic::resolver::IconResolver;
pub use logic::routes::{Route, RouteMatch, match_route, routes_for_host};
pub use tags::{PoiFeature, Tag, is_poi, poi_kinds};
pub use types::{PoiCategory, View};
