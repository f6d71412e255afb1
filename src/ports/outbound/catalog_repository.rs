use crate::application::dto::PatternLibrary;
use crate::component_matching::domain::CatalogComponent;
use crate::shared::Result;
use async_trait::async_trait;

/// CatalogRepository port for acquiring design-system catalogs
///
/// This port abstracts where catalog components come from (the Figma
/// API, a local JSON file, the built-in sample catalog).
///
/// # Async Support
/// Fetching is async so that several libraries can be fetched
/// concurrently. Implementations must be `Send + Sync`.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Fetches every component of one pattern library
    ///
    /// # Arguments
    /// * `library` - The configured library to fetch
    ///
    /// # Returns
    /// Catalog components tagged with their provenance; may be empty
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or the API returns an error status
    /// - A catalog file cannot be read or parsed
    /// - The library is missing required settings (e.g. an access token)
    async fn fetch_catalog(&self, library: &PatternLibrary) -> Result<Vec<CatalogComponent>>;
}
