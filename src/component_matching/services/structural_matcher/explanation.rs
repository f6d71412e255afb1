use crate::component_matching::domain::{
    CatalogComponent, ComponentRecord, Difference, DifferenceCategory, ReplacementSuggestion,
    ScoreBreakdown, Severity,
};

const NAME_REASON_SCORE: f64 = 70.0;
const VERY_HIGH_SCORE: f64 = 85.0;
const MODERATE_SCORE: f64 = 70.0;

pub(super) fn match_reasons(
    user: &ComponentRecord,
    catalog: &CatalogComponent,
    breakdown: &ScoreBreakdown,
    user_types: &[String],
) -> Vec<String> {
    let mut reasons = Vec::new();

    if breakdown.name > NAME_REASON_SCORE {
        reasons.push(format!(
            "Similar component name: \"{}\" ≈ \"{}\"",
            user.name(),
            catalog.name()
        ));
    }

    let catalog_types = catalog.signature().element_types();
    let shared: Vec<&str> = user_types
        .iter()
        .filter(|t| catalog_types.contains(t))
        .map(String::as_str)
        .collect();
    if !shared.is_empty() {
        reasons.push(format!("Shared element types: {}", shared.join(", ")));
    }

    if breakdown.structural >= VERY_HIGH_SCORE {
        reasons.push("Very high structural similarity".to_string());
    } else if breakdown.structural >= MODERATE_SCORE {
        reasons.push("Moderate structural similarity".to_string());
    }

    reasons
}

/// Itemizes prop and element differences, one entry per kind
pub(super) fn differences(
    user: &ComponentRecord,
    catalog: &CatalogComponent,
    user_types: &[String],
) -> Vec<Difference> {
    let signature = catalog.signature();
    let mut differences = Vec::new();

    let missing: Vec<&str> = signature
        .prop_patterns()
        .iter()
        .filter(|pattern| !user.prop_names().any(|prop| prop_covers(prop, pattern)))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        differences.push(Difference::new(
            DifferenceCategory::Prop,
            format!("Missing props from design system: {}", missing.join(", ")),
            Severity::Moderate,
        ));
    }

    let extra: Vec<&str> = user
        .prop_names()
        .filter(|prop| {
            !signature
                .prop_patterns()
                .iter()
                .any(|pattern| prop_covers(prop, pattern))
        })
        .collect();
    if !extra.is_empty() {
        differences.push(Difference::new(
            DifferenceCategory::Prop,
            format!("Extra props not in design system: {}", extra.join(", ")),
            Severity::Minor,
        ));
    }

    let foreign: Vec<&str> = user_types
        .iter()
        .filter(|t| !signature.element_types().contains(t))
        .map(String::as_str)
        .collect();
    if !foreign.is_empty() {
        differences.push(Difference::new(
            DifferenceCategory::Structure,
            format!("Different HTML elements used: {}", foreign.join(", ")),
            Severity::Moderate,
        ));
    }

    differences
}

/// A user prop accounts for a catalog pattern when its name contains the
/// pattern, case-insensitively. Unlike scoring, this only looks one way.
fn prop_covers(prop: &str, pattern: &str) -> bool {
    prop.to_lowercase().contains(&pattern.to_lowercase())
}

/// Suggests the catalog component's documented usage as a replacement
pub(super) fn replacement(
    user: &ComponentRecord,
    catalog: &CatalogComponent,
) -> Option<ReplacementSuggestion> {
    let (imports, code) = match (catalog.usage(), catalog.code_example()) {
        (Some(usage), _) if !usage.example.is_empty() => {
            (usage.imports.clone(), usage.example.clone())
        }
        (usage, Some(example)) => (
            usage.map(|u| u.imports.clone()).unwrap_or_default(),
            example.to_string(),
        ),
        _ => return None,
    };

    let source = if catalog.source().is_empty() {
        "the design system".to_string()
    } else {
        catalog.source().to_string()
    };

    Some(ReplacementSuggestion {
        imports,
        code,
        explanation: format!(
            "Replace {} with {} from {}",
            user.name(),
            catalog.name(),
            source
        ),
    })
}
