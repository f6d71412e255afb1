//! Builder for constructing MatchReport from domain objects

use super::match_report::{
    ComponentView, DiagnosticView, DifferenceView, MatchReport, MatchView, ReplacementView,
    ReportMetadata, ScoreView,
};
use crate::component_matching::domain::{
    CatalogComponent, ComponentRecord, MatchResult, Threshold,
};
use crate::component_matching::services::{DiagnosticKind, ExtractionDiagnostic};
use chrono::{SecondsFormat, Utc};

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing MatchReport from domain objects
pub struct MatchReportBuilder;

impl MatchReportBuilder {
    /// Builds the report of one analysed file
    ///
    /// # Arguments
    /// * `file` - Path of the analysed file as displayed to users
    /// * `threshold` - Threshold the matches were filtered with
    /// * `components` - Components extracted from the file
    /// * `catalog` - Catalog the components were matched against
    /// * `matches` - Accepted matches, already ranked
    /// * `diagnostics` - Extraction diagnostics
    pub fn build(
        file: &str,
        threshold: Threshold,
        components: &[ComponentRecord],
        catalog: &[CatalogComponent],
        matches: &[MatchResult<'_>],
        diagnostics: &[ExtractionDiagnostic],
    ) -> MatchReport {
        MatchReport {
            metadata: Self::build_metadata(file, threshold, catalog),
            components: components.iter().map(Self::build_component).collect(),
            matches: matches.iter().map(Self::build_match).collect(),
            diagnostics: diagnostics.iter().map(Self::build_diagnostic).collect(),
        }
    }

    fn build_metadata(file: &str, threshold: Threshold, catalog: &[CatalogComponent]) -> ReportMetadata {
        let mut catalog_sources: Vec<String> = Vec::new();
        for component in catalog {
            if !catalog_sources.iter().any(|s| s == component.source()) {
                catalog_sources.push(component.source().to_string());
            }
        }

        ReportMetadata {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            tool_name: TOOL_NAME.to_string(),
            tool_version: TOOL_VERSION.to_string(),
            file: file.to_string(),
            threshold: threshold.value(),
            catalog_size: catalog.len(),
            catalog_sources,
        }
    }

    fn build_component(component: &ComponentRecord) -> ComponentView {
        let span = component.span();
        ComponentView {
            id: component.id().to_string(),
            name: component.name().to_string(),
            kind: component.kind().to_string(),
            file: span.file.clone(),
            start_line: span.start_line,
            end_line: span.end_line,
            lines_of_code: component.lines_of_code(),
            complexity: component.complexity(),
            props: component.props().to_vec(),
            element_types: component.element_types(),
            structure: component.structure().cloned(),
        }
    }

    fn build_match(result: &MatchResult<'_>) -> MatchView {
        let user = result.user_component();
        let catalog = result.catalog_component();
        let scores = result.scores();
        let breakdown = result.breakdown();

        MatchView {
            component_id: user.id().to_string(),
            component_name: user.name().to_string(),
            location: user.span().to_string(),
            catalog_id: catalog.id().to_string(),
            catalog_name: catalog.name().to_string(),
            catalog_source: catalog.source().to_string(),
            catalog_category: catalog.category().map(str::to_string),
            catalog_description: catalog.description().map(str::to_string),
            confidence: result.confidence().to_string(),
            scores: ScoreView {
                structural: scores.structural,
                semantic: scores.semantic,
                combined: scores.combined,
                name: one_decimal(breakdown.name),
                element_types: one_decimal(breakdown.element_types),
                props: one_decimal(breakdown.props),
                complexity: one_decimal(breakdown.complexity),
            },
            reasons: result.match_reasons().to_vec(),
            differences: result
                .differences()
                .iter()
                .map(|d| DifferenceView {
                    category: d.category.as_str().to_string(),
                    description: d.description.clone(),
                    severity: d.severity.as_str().to_string(),
                })
                .collect(),
            documentation_url: catalog.documentation_url().map(str::to_string),
            replacement: result.replacement().map(|r| ReplacementView {
                imports: r.imports.clone(),
                code: r.code.clone(),
                explanation: r.explanation.clone(),
            }),
        }
    }

    fn build_diagnostic(diagnostic: &ExtractionDiagnostic) -> DiagnosticView {
        let kind = match diagnostic.kind {
            DiagnosticKind::UnparsableSource => "unparsable-source",
            DiagnosticKind::UnresolvedStructure => "unresolved-structure",
        };
        DiagnosticView {
            kind: kind.to_string(),
            message: diagnostic.message.clone(),
            component: diagnostic.component.clone(),
            line: diagnostic.line,
        }
    }
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
