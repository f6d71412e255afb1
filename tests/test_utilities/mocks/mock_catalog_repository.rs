use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use vibe_check::prelude::*;

/// Mock CatalogRepository serving catalogs by pattern library id
#[derive(Default, Clone)]
pub struct MockCatalogRepository {
    pub catalogs: HashMap<String, Vec<CatalogComponent>>,
    pub failing: Vec<String>,
    pub call_count: Arc<AtomicUsize>,
}

impl MockCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, library_id: &str, components: Vec<CatalogComponent>) -> Self {
        self.catalogs.insert(library_id.to_string(), components);
        self
    }

    pub fn with_failure(mut self, library_id: &str) -> Self {
        self.failing.push(library_id.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogRepository for MockCatalogRepository {
    async fn fetch_catalog(&self, library: &PatternLibrary) -> Result<Vec<CatalogComponent>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.failing.contains(&library.id) {
            anyhow::bail!("Mock catalog failure for {}", library.id);
        }
        self.catalogs
            .get(&library.id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Unknown pattern library: {}", library.id))
    }
}
