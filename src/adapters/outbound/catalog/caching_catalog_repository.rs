use crate::application::dto::PatternLibrary;
use crate::component_matching::domain::CatalogComponent;
use crate::ports::outbound::CatalogRepository;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingCatalogRepository wraps a CatalogRepository and adds in-memory caching.
///
/// Catalogs are keyed by pattern library id, so checking many files in one
/// run fetches each library once. Failed fetches are not cached.
pub struct CachingCatalogRepository<R: CatalogRepository> {
    inner: R,
    cache: Arc<DashMap<String, Vec<CatalogComponent>>>,
}

impl<R: CatalogRepository> CachingCatalogRepository<R> {
    /// Creates a new caching repository wrapping the given inner repository
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: CatalogRepository> CatalogRepository for CachingCatalogRepository<R> {
    async fn fetch_catalog(&self, library: &PatternLibrary) -> Result<Vec<CatalogComponent>> {
        if let Some(cached) = self.cache.get(&library.id) {
            return Ok(cached.clone());
        }

        let catalog = self.inner.fetch_catalog(library).await?;
        self.cache.insert(library.id.clone(), catalog.clone());

        Ok(catalog)
    }
}
