use crate::component_matching::domain::{CatalogComponent, CatalogProvenance};
use crate::shared::error::VibeCheckError;
use crate::shared::security::{read_regular_file, MAX_CATALOG_FILE_SIZE};
use crate::shared::Result;
use std::path::Path;

/// Loads a JSON catalog file
///
/// The file holds an array of catalog components in the same shape the
/// built-in catalog uses. Every loaded component is marked as coming
/// from a file.
///
/// # Errors
/// Returns `CatalogParseError` if the file cannot be read or is not a
/// JSON array of components.
pub fn load_catalog_file(path: &Path) -> Result<Vec<CatalogComponent>> {
    let parse_error = |details: String| VibeCheckError::CatalogParseError {
        path: path.to_path_buf(),
        details,
    };

    let content = read_regular_file(path, "catalog file", MAX_CATALOG_FILE_SIZE)
        .map_err(|e| parse_error(e.to_string()))?;

    let components: Vec<CatalogComponent> =
        serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?;

    Ok(components
        .into_iter()
        .map(|c| c.with_provenance(CatalogProvenance::File))
        .collect())
}
