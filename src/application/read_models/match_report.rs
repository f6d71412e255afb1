//! Match report read model
//!
//! Owned, serialisable views of one file's analysis. Match results borrow
//! their records; the report copies what presentation needs so it can
//! outlive them.

use crate::component_matching::domain::{ComponentProp, StructureNode};
use serde::Serialize;

/// Everything known about one analysed file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub metadata: ReportMetadata,
    pub components: Vec<ComponentView>,
    pub matches: Vec<MatchView>,
    pub diagnostics: Vec<DiagnosticView>,
}

impl MatchReport {
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// RFC 3339 timestamp of the analysis
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub file: String,
    pub threshold: f64,
    pub catalog_size: usize,
    /// Distinct catalog source labels, in first-seen order
    pub catalog_sources: Vec<String>,
}

/// View representation of an extracted component
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentView {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub file: String,
    pub start_line: usize,
    pub end_line: usize,
    pub lines_of_code: usize,
    pub complexity: u32,
    pub props: Vec<ComponentProp>,
    pub element_types: Vec<String>,
    pub structure: Option<StructureNode>,
}

/// View representation of one accepted match
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub component_id: String,
    pub component_name: String,
    /// `file:line` of the user component
    pub location: String,
    pub catalog_id: String,
    pub catalog_name: String,
    pub catalog_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_description: Option<String>,
    pub confidence: String,
    pub scores: ScoreView,
    pub reasons: Vec<String>,
    pub differences: Vec<DifferenceView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<ReplacementView>,
}

/// Rounded scores plus the per-factor breakdown (one decimal)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreView {
    pub structural: u8,
    pub semantic: u8,
    pub combined: u8,
    pub name: f64,
    pub element_types: f64,
    pub props: f64,
    pub complexity: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferenceView {
    pub category: String,
    pub description: String,
    pub severity: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementView {
    pub imports: Vec<String>,
    pub code: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticView {
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}
