use crate::component_matching::domain::{
    CatalogComponent, CatalogProvenance, ChildrenPattern, StructureSignature,
};
use crate::shared::Result;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";

/// Keywords lifted into catalog tags when they occur in a name or description
const TAG_KEYWORDS: [&str; 10] = [
    "primary",
    "secondary",
    "large",
    "small",
    "icon",
    "disabled",
    "loading",
    "error",
    "success",
    "warning",
];

#[derive(Debug, Deserialize)]
struct FigmaComponentsResponse {
    meta: FigmaMeta,
}

#[derive(Debug, Deserialize)]
struct FigmaMeta {
    #[serde(default)]
    components: Vec<FigmaComponent>,
}

#[derive(Debug, Clone, Deserialize)]
struct FigmaComponent {
    key: String,
    name: String,
    #[serde(default)]
    description: String,
    node_id: String,
}

/// FigmaClient adapter for fetching published components of a Figma file
///
/// Figma only exposes design metadata, so the mapped catalog records carry
/// element types inferred from the component name, no prop patterns and
/// an unknown children pattern.
pub struct FigmaClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl FigmaClient {
    /// Creates a client for the public Figma REST API
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("vibe-check/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: 3,
        })
    }

    /// Points the client at another API root (self-hosted proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Fetches the components of a Figma file as catalog records
    ///
    /// # Arguments
    /// * `file_key` - Key of the Figma file (the id segment of its URL)
    /// * `access_token` - Personal access token sent as `X-Figma-Token`
    /// * `node_ids` - When non-empty, only components with these node ids are kept
    ///
    /// # Errors
    /// Returns an error if the file key is unsafe to embed in a URL, or if
    /// the API keeps failing after all retries.
    pub async fn fetch_components(
        &self,
        file_key: &str,
        access_token: &str,
        node_ids: &[String],
    ) -> Result<Vec<CatalogComponent>> {
        Self::validate_file_key(file_key)?;

        let response = self.fetch_with_retry(file_key, access_token).await?;

        Ok(response
            .meta
            .components
            .into_iter()
            .filter(|c| node_ids.is_empty() || node_ids.iter().any(|id| id == &c.node_id))
            .map(|c| Self::to_catalog_component(file_key, c))
            .collect())
    }

    async fn fetch_with_retry(
        &self,
        file_key: &str,
        access_token: &str,
    ) -> Result<FigmaComponentsResponse> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_from_figma(file_key, access_token).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(200 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("Figma API was not contacted")))
    }

    async fn fetch_from_figma(
        &self,
        file_key: &str,
        access_token: &str,
    ) -> Result<FigmaComponentsResponse> {
        let url = format!(
            "{}/files/{}/components",
            self.base_url,
            urlencoding::encode(file_key)
        );

        let response = self
            .client
            .get(&url)
            .header("X-Figma-Token", access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Figma API returned status code {}", response.status());
        }

        Ok(response.json().await?)
    }

    /// Rejects file keys that would change the request path
    fn validate_file_key(file_key: &str) -> Result<()> {
        if file_key.trim().is_empty() {
            anyhow::bail!("Figma file key must not be empty");
        }
        if file_key.contains('/') || file_key.contains('\\') || file_key.contains("..") {
            anyhow::bail!("Security: Figma file key contains path separators which are not allowed");
        }
        if file_key.contains('#') || file_key.contains('?') || file_key.contains('@') {
            anyhow::bail!("Security: Figma file key contains URL-unsafe characters");
        }
        Ok(())
    }

    fn to_catalog_component(file_key: &str, component: FigmaComponent) -> CatalogComponent {
        let documentation_url = format!(
            "https://www.figma.com/file/{}?node-id={}",
            file_key,
            urlencoding::encode(&component.node_id)
        );
        let signature = StructureSignature::new(
            infer_element_types(&component.name),
            Vec::new(),
            ChildrenPattern::Unknown,
        );
        let category = infer_category(&component.name).map(str::to_string);
        let tags = infer_tags(&component.name, &component.description);
        let description = if component.description.is_empty() {
            None
        } else {
            Some(component.description)
        };

        CatalogComponent::new(
            format!("figma:{}", component.key),
            component.name,
            file_key,
            signature,
        )
        .with_provenance(CatalogProvenance::Figma)
        .with_description(description)
        .with_category(category)
        .with_tags(tags)
        .with_documentation_url(Some(documentation_url))
    }
}

fn infer_category(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    let has = |keyword: &str| lower.contains(keyword);

    if has("button") {
        Some("Button")
    } else if has("input") || has("field") {
        Some("Form")
    } else if has("card") {
        Some("Card")
    } else if has("modal") || has("dialog") {
        Some("Overlay")
    } else if has("nav") || has("menu") {
        Some("Navigation")
    } else if has("header") || has("footer") {
        Some("Layout")
    } else {
        None
    }
}

fn infer_tags(name: &str, description: &str) -> Vec<String> {
    let text = format!("{} {}", name, description).to_lowercase();
    TAG_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

fn infer_element_types(name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    let mut types = Vec::new();

    if lower.contains("button") {
        types.push("button");
    }
    if lower.contains("input") {
        types.push("input");
    }
    if lower.contains("card") {
        types.push("div");
    }
    if lower.contains("modal") {
        types.extend(["div", "dialog"]);
    }
    if types.is_empty() {
        types.push("div");
    }

    types.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figma_component(name: &str, description: &str) -> FigmaComponent {
        FigmaComponent {
            key: "abc123".to_string(),
            name: name.to_string(),
            description: description.to_string(),
            node_id: "1:23".to_string(),
        }
    }

    #[test]
    fn test_figma_client_creation() {
        assert!(FigmaClient::new().is_ok());
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = FigmaClient::new().unwrap().with_base_url("http://localhost:9000/v1/");
        assert_eq!(client.base_url, "http://localhost:9000/v1");
    }

    #[test]
    fn test_infer_category() {
        assert_eq!(infer_category("Primary Button"), Some("Button"));
        assert_eq!(infer_category("Text Field"), Some("Form"));
        assert_eq!(infer_category("Profile Card"), Some("Card"));
        assert_eq!(infer_category("Confirm Dialog"), Some("Overlay"));
        assert_eq!(infer_category("Side Menu"), Some("Navigation"));
        assert_eq!(infer_category("Page Footer"), Some("Layout"));
        assert_eq!(infer_category("Avatar"), None);
    }

    #[test]
    fn test_infer_tags_reads_name_and_description() {
        let tags = infer_tags("Large Button", "Primary call to action with loading state");
        assert_eq!(tags, vec!["primary", "large", "loading"]);
    }

    #[test]
    fn test_infer_element_types() {
        assert_eq!(infer_element_types("Icon Button"), vec!["button"]);
        assert_eq!(infer_element_types("Search Input"), vec!["input"]);
        assert_eq!(infer_element_types("Card"), vec!["div"]);
        assert_eq!(infer_element_types("Modal"), vec!["div", "dialog"]);
        assert_eq!(infer_element_types("Input Button"), vec!["button", "input"]);
        assert_eq!(infer_element_types("Avatar"), vec!["div"]);
    }

    #[test]
    fn test_to_catalog_component() {
        let component = FigmaClient::to_catalog_component(
            "FILEKEY",
            figma_component("Modal Card", "Disabled while saving"),
        );

        assert_eq!(component.id(), "figma:abc123");
        assert_eq!(component.name(), "Modal Card");
        assert_eq!(component.source(), "FILEKEY");
        assert_eq!(component.provenance(), CatalogProvenance::Figma);
        assert_eq!(component.category(), Some("Card"));
        assert_eq!(component.tags(), ["disabled"]);
        assert_eq!(component.signature().element_types(), ["div", "dialog"]);
        assert!(component.signature().prop_patterns().is_empty());
        assert_eq!(
            component.signature().children_pattern(),
            ChildrenPattern::Unknown
        );
        assert_eq!(
            component.documentation_url(),
            Some("https://www.figma.com/file/FILEKEY?node-id=1%3A23")
        );
        assert!(component.validate().is_ok());
    }

    #[test]
    fn test_empty_description_is_dropped() {
        let component = FigmaClient::to_catalog_component("K", figma_component("Badge", ""));
        assert_eq!(component.description(), None);
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "status": 200,
            "meta": {
                "components": [
                    {"key": "k1", "name": "Button", "description": "", "node_id": "1:2", "thumbnail_url": "x"},
                    {"key": "k2", "name": "Card", "node_id": "3:4"}
                ]
            }
        }"#;
        let response: FigmaComponentsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.meta.components.len(), 2);
        assert_eq!(response.meta.components[1].description, "");
    }

    #[test]
    fn test_validate_file_key() {
        assert!(FigmaClient::validate_file_key("aBc123XyZ").is_ok());
        assert!(FigmaClient::validate_file_key("").is_err());
        assert!(FigmaClient::validate_file_key("../etc").is_err());
        assert!(FigmaClient::validate_file_key("key?x=1").is_err());
    }

    #[tokio::test]
    async fn test_fetch_components_rejects_unsafe_key_without_request() {
        let client = FigmaClient::new().unwrap().with_base_url("http://127.0.0.1:9");
        let err = client
            .fetch_components("a/b", "token", &[])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("path separators"));
    }
}
