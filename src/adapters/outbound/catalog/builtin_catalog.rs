use crate::component_matching::domain::{CatalogComponent, CatalogProvenance};
use crate::shared::Result;
use anyhow::Context;

/// Embedded catalog data, a Square-style sample design system
const BUILTIN_CATALOG_JSON: &str = include_str!("builtin_catalog.json");

/// BuiltinCatalog provides the sample design system shipped with the tool
///
/// Used when no pattern library is configured, or when every configured
/// library came back empty.
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    /// Parses the embedded catalog
    ///
    /// # Errors
    /// Only fails if the embedded JSON is malformed.
    pub fn load() -> Result<Vec<CatalogComponent>> {
        let components: Vec<CatalogComponent> = serde_json::from_str(BUILTIN_CATALOG_JSON)
            .context("Failed to parse the built-in design system catalog")?;

        Ok(components
            .into_iter()
            .map(|c| c.with_provenance(CatalogProvenance::Builtin))
            .collect())
    }
}
