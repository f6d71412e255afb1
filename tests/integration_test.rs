/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;
use vibe_check::component_matching::domain::{ChildrenPattern, StructureSignature};
use vibe_check::prelude::*;

const CUSTOM_BUTTON: &str = r#"
import React from "react";

export function CustomButton({ label, onClick }) {
  return (
    <button className="btn" onClick={onClick}>
      {label}
    </button>
  );
}

export const Spinner = () => <svg><circle r="4" /></svg>;
"#;

const CLASS_CARD: &str = r#"
import React from "react";

export class InfoCard extends React.Component {
  render() {
    const { title } = this.props;
    return (
      <div className="card">
        <h3>{title}</h3>
      </div>
    );
  }
}
"#;

fn acme_catalog() -> Vec<CatalogComponent> {
    vec![
        CatalogComponent::new(
            "acme-button",
            "Button",
            "acme",
            StructureSignature::new(
                vec!["button".to_string()],
                vec!["label".to_string(), "onClick".to_string()],
                ChildrenPattern::Text,
            ),
        ),
        CatalogComponent::new(
            "acme-card",
            "Card",
            "acme",
            StructureSignature::new(
                vec!["div".to_string(), "h3".to_string()],
                vec!["title".to_string()],
                ChildrenPattern::Structured,
            ),
        ),
    ]
}

fn acme_library() -> PatternLibrary {
    PatternLibrary::new("acme", "Acme", LibrarySource::Builtin)
}

fn request(path: &str, libraries: Vec<PatternLibrary>) -> CheckRequest {
    CheckRequest::new(PathBuf::from(path), Threshold::default(), libraries)
}

#[tokio::test]
async fn test_check_file_happy_path() {
    let source_reader = MockSourceReader::new().with_file("src/CustomButton.jsx", CUSTOM_BUTTON);
    let catalog_repository = MockCatalogRepository::new().with_catalog("acme", acme_catalog());
    let progress_reporter = MockProgressReporter::new();

    let use_case = CheckFileUseCase::new(
        source_reader,
        catalog_repository,
        progress_reporter.clone(),
    );

    let response = use_case
        .execute(request("src/CustomButton.jsx", vec![acme_library()]))
        .await
        .unwrap();

    assert_eq!(response.components.len(), 2);
    assert_eq!(response.outcome, CheckOutcome::MatchesFound(1));

    let report = &response.report;
    assert_eq!(report.matches.len(), 1);
    let best = &report.matches[0];
    assert_eq!(best.component_name, "CustomButton");
    assert_eq!(best.catalog_name, "Button");
    assert_eq!(best.location, "src/CustomButton.jsx:4");
    assert!(best.scores.combined >= 85);
    assert_eq!(best.confidence, "high");
    assert!(progress_reporter.has_message_containing("Found 2 component(s)"));
}

#[tokio::test]
async fn test_class_component_matches_card() {
    let source_reader = MockSourceReader::new().with_file("InfoCard.tsx", CLASS_CARD);
    let catalog_repository = MockCatalogRepository::new().with_catalog("acme", acme_catalog());

    let use_case = CheckFileUseCase::new(
        source_reader,
        catalog_repository,
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(request("InfoCard.tsx", vec![acme_library()]))
        .await
        .unwrap();

    assert_eq!(response.components.len(), 1);
    assert_eq!(response.report.components[0].kind, "ClassComponent");
    assert_eq!(response.report.components[0].element_types, vec!["div", "h3"]);
    // Class components carry no props, so only name, elements and complexity score
    assert!(response.report.matches.is_empty());
    assert_eq!(response.outcome, CheckOutcome::NoMatches);
}

#[tokio::test]
async fn test_catalog_fetched_once_across_files() {
    let source_reader = MockSourceReader::new()
        .with_file("a.jsx", CUSTOM_BUTTON)
        .with_file("b.tsx", CLASS_CARD);
    let inner = MockCatalogRepository::new().with_catalog("acme", acme_catalog());
    let calls = inner.clone();

    let use_case = CheckFileUseCase::new(
        source_reader,
        CachingCatalogRepository::new(inner),
        MockProgressReporter::new(),
    );

    use_case
        .execute(request("a.jsx", vec![acme_library()]))
        .await
        .unwrap();
    use_case
        .execute(request("b.tsx", vec![acme_library()]))
        .await
        .unwrap();

    assert_eq!(calls.calls(), 1);
}

#[tokio::test]
async fn test_failing_library_is_skipped() {
    let source_reader = MockSourceReader::new().with_file("a.jsx", CUSTOM_BUTTON);
    let catalog_repository = MockCatalogRepository::new()
        .with_catalog("acme", acme_catalog())
        .with_failure("figma");
    let progress_reporter = MockProgressReporter::new();

    let figma = PatternLibrary::new(
        "figma",
        "Team Figma",
        LibrarySource::Figma {
            file_key: "KEY".to_string(),
            access_token: None,
            node_ids: vec![],
        },
    );

    let use_case = CheckFileUseCase::new(
        source_reader,
        catalog_repository,
        progress_reporter.clone(),
    );
    let response = use_case
        .execute(request("a.jsx", vec![figma, acme_library()]))
        .await
        .unwrap();

    assert_eq!(response.catalog.len(), 2);
    assert!(progress_reporter
        .get_errors()
        .iter()
        .any(|e| e.contains("Skipping pattern library 'Team Figma'")));
}

#[tokio::test]
async fn test_disabled_library_falls_back_to_builtin() {
    let source_reader = MockSourceReader::new().with_file("a.jsx", CUSTOM_BUTTON);
    let use_case = CheckFileUseCase::new(
        source_reader,
        PatternLibraryRepository::new().unwrap(),
        MockProgressReporter::new(),
    );

    let disabled = acme_library().with_enabled(false);
    let response = use_case
        .execute(request("a.jsx", vec![disabled]))
        .await
        .unwrap();

    assert_eq!(response.catalog.len(), 15);
    assert!(response
        .catalog
        .iter()
        .all(|c| c.source() == "square-design-system"));
    assert_eq!(
        response.report.metadata.catalog_sources,
        vec!["square-design-system"]
    );
}

#[tokio::test]
async fn test_unsupported_file_is_rejected_before_reading() {
    let use_case = CheckFileUseCase::new(
        MockSourceReader::new(),
        MockCatalogRepository::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(request("styles.css", vec![]))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Unsupported file"));
}

#[tokio::test]
async fn test_formatters_render_use_case_output() {
    let source_reader = MockSourceReader::new().with_file("src/CustomButton.jsx", CUSTOM_BUTTON);
    let catalog_repository = MockCatalogRepository::new().with_catalog("acme", acme_catalog());
    let use_case = CheckFileUseCase::new(
        source_reader,
        catalog_repository,
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(request("src/CustomButton.jsx", vec![acme_library()]))
        .await
        .unwrap();
    let reports = vec![response.report];

    let text = TextFormatter::new().format(&reports).unwrap();
    assert!(text.contains("Your component: CustomButton"));

    let json = JsonFormatter::new().format(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["matches"][0]["catalogId"], "acme-button");

    let markdown = MarkdownFormatter::new().format(&reports).unwrap();
    assert!(markdown.contains("| CustomButton | Button | acme |"));
}
