use crate::shared::error::VibeCheckError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Where a catalog record was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogProvenance {
    Figma,
    #[default]
    File,
    Builtin,
}

impl CatalogProvenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogProvenance::Figma => "figma",
            CatalogProvenance::File => "file",
            CatalogProvenance::Builtin => "builtin",
        }
    }
}

/// Shape of the content a catalog component expects as children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildrenPattern {
    Text,
    Icon,
    Structured,
    Mixed,
    None,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Coarse structural fingerprint of a catalog component
///
/// Element types behave as a set: duplicates are dropped on construction
/// while the first-seen order is kept for stable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSignature")]
pub struct StructureSignature {
    element_types: Vec<String>,
    prop_patterns: Vec<String>,
    children_pattern: ChildrenPattern,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSignature {
    #[serde(default)]
    element_types: Vec<String>,
    #[serde(default)]
    prop_patterns: Vec<String>,
    #[serde(default)]
    children_pattern: ChildrenPattern,
}

impl From<RawSignature> for StructureSignature {
    fn from(raw: RawSignature) -> Self {
        StructureSignature::new(raw.element_types, raw.prop_patterns, raw.children_pattern)
    }
}

impl StructureSignature {
    pub fn new(
        element_types: Vec<String>,
        prop_patterns: Vec<String>,
        children_pattern: ChildrenPattern,
    ) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(element_types.len());
        for element_type in element_types {
            if !unique.contains(&element_type) {
                unique.push(element_type);
            }
        }
        Self {
            element_types: unique,
            prop_patterns,
            children_pattern,
        }
    }

    pub fn element_types(&self) -> &[String] {
        &self.element_types
    }

    pub fn prop_patterns(&self) -> &[String] {
        &self.prop_patterns
    }

    pub fn children_pattern(&self) -> ChildrenPattern {
        self.children_pattern
    }
}

/// A prop entry in catalog usage documentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageProp {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub prop_type: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// How to consume a catalog component in application code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogUsage {
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub props: Vec<UsageProp>,
    #[serde(default)]
    pub example: String,
}

fn generate_catalog_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A reference component from a design-system catalog
///
/// Read-only once loaded. The JSON form (camelCase) is the format of
/// local catalog files and of the built-in sample catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogComponent {
    #[serde(default = "generate_catalog_id")]
    id: String,
    name: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    provenance: CatalogProvenance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(rename = "structure")]
    signature: StructureSignature,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    documentation_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code_example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage: Option<CatalogUsage>,
}

impl CatalogComponent {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source: impl Into<String>,
        signature: StructureSignature,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            source: source.into(),
            provenance: CatalogProvenance::default(),
            description: None,
            category: None,
            tags: Vec::new(),
            signature,
            documentation_url: None,
            code_example: None,
            usage: None,
        }
    }

    pub fn with_provenance(mut self, provenance: CatalogProvenance) -> Self {
        self.provenance = provenance;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_documentation_url(mut self, url: Option<String>) -> Self {
        self.documentation_url = url;
        self
    }

    pub fn with_code_example(mut self, example: Option<String>) -> Self {
        self.code_example = example;
        self
    }

    pub fn with_usage(mut self, usage: Option<CatalogUsage>) -> Self {
        self.usage = usage;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form label of the catalog this record belongs to
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn provenance(&self) -> CatalogProvenance {
        self.provenance
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn signature(&self) -> &StructureSignature {
        &self.signature
    }

    pub fn documentation_url(&self) -> Option<&str> {
        self.documentation_url.as_deref()
    }

    pub fn code_example(&self) -> Option<&str> {
        self.code_example.as_deref()
    }

    pub fn usage(&self) -> Option<&CatalogUsage> {
        self.usage.as_ref()
    }

    /// Rejects records the matcher cannot score meaningfully
    ///
    /// # Errors
    /// Returns `VibeCheckError::InvalidCatalogComponent` for a blank name,
    /// a blank element type or a blank prop pattern.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| VibeCheckError::InvalidCatalogComponent {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()).into());
        }
        if let Some(index) = self
            .signature
            .element_types
            .iter()
            .position(|t| t.trim().is_empty())
        {
            return Err(invalid(format!("element type at index {} is blank", index)).into());
        }
        if let Some(index) = self
            .signature
            .prop_patterns
            .iter()
            .position(|p| p.trim().is_empty())
        {
            return Err(invalid(format!("prop pattern at index {} is blank", index)).into());
        }
        Ok(())
    }
}
