use crate::adapters::outbound::filesystem::load_catalog_file;
use crate::adapters::outbound::network::FigmaClient;
use crate::application::dto::{LibrarySource, PatternLibrary};
use crate::component_matching::domain::CatalogComponent;
use crate::ports::outbound::CatalogRepository;
use crate::shared::error::VibeCheckError;
use crate::shared::Result;
use async_trait::async_trait;

use super::BuiltinCatalog;

/// PatternLibraryRepository routes each pattern library to its source
///
/// Figma libraries go through the REST client, file libraries are read
/// from disk and the built-in library is served from embedded data.
pub struct PatternLibraryRepository {
    figma: FigmaClient,
    default_figma_token: Option<String>,
}

impl PatternLibraryRepository {
    /// Creates a repository with a default Figma client
    pub fn new() -> Result<Self> {
        Ok(Self::with_figma_client(FigmaClient::new()?))
    }

    pub fn with_figma_client(figma: FigmaClient) -> Self {
        Self {
            figma,
            default_figma_token: None,
        }
    }

    /// Token used by Figma libraries that do not carry their own
    pub fn with_default_figma_token(mut self, token: Option<String>) -> Self {
        self.default_figma_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    async fn fetch_figma(
        &self,
        library: &PatternLibrary,
        file_key: &str,
        access_token: Option<&str>,
        node_ids: &[String],
    ) -> Result<Vec<CatalogComponent>> {
        let token = access_token
            .filter(|t| !t.trim().is_empty())
            .or(self.default_figma_token.as_deref())
            .ok_or_else(|| VibeCheckError::LibraryFetchError {
                library: library.name.clone(),
                details: "no Figma access token configured (set access_token or FIGMA_ACCESS_TOKEN)"
                    .to_string(),
            })?;

        self.figma
            .fetch_components(file_key, token, node_ids)
            .await
            .map_err(|e| {
                VibeCheckError::LibraryFetchError {
                    library: library.name.clone(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}

#[async_trait]
impl CatalogRepository for PatternLibraryRepository {
    async fn fetch_catalog(&self, library: &PatternLibrary) -> Result<Vec<CatalogComponent>> {
        match &library.source {
            LibrarySource::Figma {
                file_key,
                access_token,
                node_ids,
            } => {
                self.fetch_figma(library, file_key, access_token.as_deref(), node_ids)
                    .await
            }
            LibrarySource::File { path } => load_catalog_file(path),
            LibrarySource::Builtin => BuiltinCatalog::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_matching::domain::CatalogProvenance;
    use std::fs;
    use tempfile::TempDir;

    fn repository() -> PatternLibraryRepository {
        PatternLibraryRepository::with_figma_client(
            FigmaClient::new().unwrap().with_base_url("http://127.0.0.1:9"),
        )
    }

    #[tokio::test]
    async fn test_fetch_builtin_library() {
        let catalog = repository()
            .fetch_catalog(&PatternLibrary::builtin())
            .await
            .unwrap();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog[0].provenance(), CatalogProvenance::Builtin);
    }

    #[tokio::test]
    async fn test_fetch_file_library() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("acme.json");
        fs::write(
            &path,
            r#"[{"name": "Tag", "source": "acme", "structure": {"elementTypes": ["span"]}}]"#,
        )
        .unwrap();

        let catalog = repository()
            .fetch_catalog(&PatternLibrary::file(path))
            .await
            .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name(), "Tag");
        assert_eq!(catalog[0].provenance(), CatalogProvenance::File);
    }

    #[tokio::test]
    async fn test_fetch_figma_library_without_token() {
        let library = PatternLibrary::new(
            "figma-main",
            "Main Figma",
            LibrarySource::Figma {
                file_key: "FILEKEY".to_string(),
                access_token: None,
                node_ids: vec![],
            },
        );

        let err = repository()
            .with_default_figma_token(Some("  ".to_string()))
            .fetch_catalog(&library)
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("'Main Figma'"));
        assert!(message.contains("FIGMA_ACCESS_TOKEN"));
    }
}
