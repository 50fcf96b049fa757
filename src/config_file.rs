//! Catalog configuration file handling.
//!
//! A config file lets a deployment add or replace icons without rebuilding.
//! The file is JSON:
//!
//! ```json
//! {
//!   "extend_builtin": true,
//!   "icons": { "cafe": "mdi-coffee", "default": "mdi-map-marker" }
//! }
//! ```
//!
//! With `extend_builtin` set, `icons` is merged over the built-in table.
//! Without it, `icons` is the whole table and must carry a `default` entry.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::catalog::{BUILTIN_ICONS, DEFAULT_KEY, IconCatalog};

/// Icon catalog configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Merge `icons` over the built-in table instead of replacing it
    #[serde(default = "default_extend_builtin")]
    pub extend_builtin: bool,

    /// Keyword → icon overrides
    #[serde(default)]
    pub icons: BTreeMap<String, String>,
}

fn default_extend_builtin() -> bool {
    true
}

impl CatalogConfig {
    /// Create a configuration that uses the built-in table unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize catalog configuration to JSON")?;

        fs::write(&path, json).with_context(|| {
            format!("Failed to write catalog configuration to {:?}", path.as_ref())
        })?;

        info!("Catalog configuration written to {:?}", path.as_ref());
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).with_context(|| {
            format!("Failed to read catalog configuration from {:?}", path.as_ref())
        })?;

        let config: Self = serde_json::from_str(&content)
            .context("Failed to parse catalog configuration JSON")?;

        debug!(
            overrides = config.icons.len(),
            extend_builtin = config.extend_builtin,
            "catalog configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (keyword, icon) in &self.icons {
            if keyword.trim().is_empty() {
                anyhow::bail!("Icon keywords cannot be blank");
            }
            if keyword.trim() != keyword {
                anyhow::bail!(
                    "Icon keyword {:?} has leading or trailing whitespace",
                    keyword
                );
            }
            if icon.trim().is_empty() {
                anyhow::bail!("Icon for keyword {:?} cannot be blank", keyword);
            }
        }

        if !self.extend_builtin && !self.icons.contains_key(DEFAULT_KEY) {
            anyhow::bail!(
                "A '{}' icon must be specified when not extending the built-in table",
                DEFAULT_KEY
            );
        }

        Ok(())
    }

    /// Build the effective icon catalog.
    pub fn to_catalog(&self) -> Result<IconCatalog> {
        self.validate()?;

        let base = if self.extend_builtin {
            BUILTIN_ICONS
        } else {
            &[]
        };
        let entries = base
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .chain(self.icons.iter().map(|(k, v)| (k.clone(), v.clone())));

        Ok(IconCatalog::from_entries(entries)?)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            extend_builtin: true,
            icons: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config_is_builtin() {
        let catalog = CatalogConfig::new().to_catalog().unwrap();
        assert_eq!(catalog, IconCatalog::builtin());
    }

    #[test]
    fn test_extend_overrides_and_adds() {
        let config = CatalogConfig {
            extend_builtin: true,
            icons: overrides(&[("cafe", "mdi-coffee"), ("pub", "mdi-glass-mug")]),
        };
        let catalog = config.to_catalog().unwrap();
        assert_eq!(catalog.get("cafe"), Some("mdi-coffee"));
        assert_eq!(catalog.get("pub"), Some("mdi-glass-mug"));
        assert_eq!(catalog.get("bar"), Some("mdi-glass-cocktail"));
        assert_eq!(catalog.default_icon(), "mdi-domain");
    }

    #[test]
    fn test_replace_requires_default() {
        let config = CatalogConfig {
            extend_builtin: false,
            icons: overrides(&[("cafe", "mdi-coffee")]),
        };
        assert!(config.validate().is_err());
        assert!(config.to_catalog().is_err());
    }

    #[test]
    fn test_replace_drops_builtin() {
        let config = CatalogConfig {
            extend_builtin: false,
            icons: overrides(&[("cafe", "mdi-coffee"), ("default", "mdi-map-marker")]),
        };
        let catalog = config.to_catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("pub"), None);
        assert_eq!(catalog.default_icon(), "mdi-map-marker");
    }

    #[test]
    fn test_validate_rejects_blank_entries() {
        let blank_icon = CatalogConfig {
            extend_builtin: true,
            icons: overrides(&[("cafe", "  ")]),
        };
        assert!(blank_icon.validate().is_err());

        let blank_keyword = CatalogConfig {
            extend_builtin: true,
            icons: overrides(&[("", "mdi-coffee")]),
        };
        assert!(blank_keyword.validate().is_err());

        let padded_keyword = CatalogConfig {
            extend_builtin: true,
            icons: overrides(&[(" cafe", "mdi-coffee")]),
        };
        assert!(padded_keyword.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: CatalogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }
}
