use super::catalog::CatalogComponent;
use super::component::ComponentRecord;

/// Coarse presentation bucket derived from the combined score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DifferenceCategory {
    Prop,
    Structure,
    Behavior,
}

impl DifferenceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifferenceCategory::Prop => "prop",
            DifferenceCategory::Structure => "structure",
            DifferenceCategory::Behavior => "behavior",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Minor,
    Moderate,
    Major,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Major => "major",
        }
    }
}

/// One itemized way a user component departs from its catalog match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    pub category: DifferenceCategory,
    pub description: String,
    pub severity: Severity,
}

impl Difference {
    pub fn new(category: DifferenceCategory, description: String, severity: Severity) -> Self {
        Self {
            category,
            description,
            severity,
        }
    }
}

/// Unrounded factor scores of one (user, catalog) pair, each in 0..=100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub name: f64,
    pub element_types: f64,
    pub props: f64,
    pub complexity: f64,
    /// Weighted sum of the four factors
    pub structural: f64,
}

/// Rounded scores as presented to users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScores {
    pub structural: u8,
    /// Reserved channel, always 0
    pub semantic: u8,
    pub combined: u8,
}

impl MatchScores {
    pub fn from_breakdown(breakdown: &ScoreBreakdown) -> Self {
        let structural = round_score(breakdown.structural);
        Self {
            structural,
            semantic: 0,
            combined: structural,
        }
    }
}

fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Textual suggestion for replacing a user component with a catalog one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementSuggestion {
    pub imports: Vec<String>,
    pub code: String,
    pub explanation: String,
}

/// A scored pairing of a user component with a catalog component
///
/// Borrows both records; the result never outlives the extraction pass
/// and the catalog it was computed from.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    user_component: &'a ComponentRecord,
    catalog_component: &'a CatalogComponent,
    breakdown: ScoreBreakdown,
    scores: MatchScores,
    confidence: Confidence,
    match_reasons: Vec<String>,
    differences: Vec<Difference>,
    replacement: Option<ReplacementSuggestion>,
}

impl<'a> MatchResult<'a> {
    pub fn new(
        user_component: &'a ComponentRecord,
        catalog_component: &'a CatalogComponent,
        breakdown: ScoreBreakdown,
        confidence: Confidence,
        match_reasons: Vec<String>,
        differences: Vec<Difference>,
        replacement: Option<ReplacementSuggestion>,
    ) -> Self {
        Self {
            user_component,
            catalog_component,
            scores: MatchScores::from_breakdown(&breakdown),
            breakdown,
            confidence,
            match_reasons,
            differences,
            replacement,
        }
    }

    pub fn user_component(&self) -> &'a ComponentRecord {
        self.user_component
    }

    pub fn catalog_component(&self) -> &'a CatalogComponent {
        self.catalog_component
    }

    pub fn scores(&self) -> MatchScores {
        self.scores
    }

    pub fn breakdown(&self) -> &ScoreBreakdown {
        &self.breakdown
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn match_reasons(&self) -> &[String] {
        &self.match_reasons
    }

    pub fn differences(&self) -> &[Difference] {
        &self.differences
    }

    pub fn replacement(&self) -> Option<&ReplacementSuggestion> {
        self.replacement.as_ref()
    }
}
