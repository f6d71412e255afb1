//! Shared report fixture for formatter tests

use crate::application::read_models::{MatchReport, MatchReportBuilder};
use crate::component_matching::domain::{
    CatalogComponent, CatalogUsage, ChildrenPattern, ComponentKind, ComponentProp,
    ComponentRecord, SourceSpan, StructureNode, StructureSignature, Threshold,
};
use crate::component_matching::services::match_components;

fn custom_button() -> ComponentRecord {
    ComponentRecord::new(
        "CustomButton".to_string(),
        ComponentKind::FunctionComponent,
        vec![ComponentProp::required("label")],
        Some(StructureNode::new("button")),
        1,
        SourceSpan {
            file: "src/CustomButton.tsx".to_string(),
            start_line: 2,
            end_line: 4,
            start_column: 0,
            end_column: 1,
        },
        "const CustomButton = ({ label }) => <button>{label}</button>;".to_string(),
    )
}

fn acme_button() -> CatalogComponent {
    CatalogComponent::new(
        "btn",
        "Button",
        "acme",
        StructureSignature::new(
            vec!["button".to_string()],
            vec!["label".to_string()],
            ChildrenPattern::Text,
        ),
    )
    .with_documentation_url(Some("https://acme.dev/button".to_string()))
    .with_usage(Some(CatalogUsage {
        imports: vec!["import { Button } from \"acme\"".to_string()],
        props: vec![],
        example: "<Button label=\"Go\" />".to_string(),
    }))
}

/// Report for `src/CustomButton.tsx`, with or without its Button match
pub(crate) fn sample_report(with_match: bool) -> MatchReport {
    let components = vec![custom_button()];
    let catalog = vec![acme_button()];
    let matches = if with_match {
        match_components(&components, &catalog, Threshold::default())
    } else {
        Vec::new()
    };
    MatchReportBuilder::build(
        "src/CustomButton.tsx",
        Threshold::default(),
        &components,
        &catalog,
        &matches,
        &[],
    )
}
