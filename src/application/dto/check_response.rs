use crate::application::read_models::MatchReport;
use crate::component_matching::domain::{CatalogComponent, ComponentRecord};

/// How a check ended when nothing went wrong
///
/// Lets callers tell an empty result apart from a failure, which is
/// always reported as `Err` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The file defines no components (or could not be parsed)
    NoComponents,
    /// Components were found but none reached the threshold
    NoMatches,
    /// This many (user, catalog) pairs reached the threshold
    MatchesFound(usize),
}

impl CheckOutcome {
    pub fn has_matches(&self) -> bool {
        matches!(self, CheckOutcome::MatchesFound(_))
    }
}

/// CheckResponse - Response DTO of the check-file use case
#[derive(Debug, Clone)]
pub struct CheckResponse {
    /// Components extracted from the file
    pub components: Vec<ComponentRecord>,
    /// Catalog the components were matched against
    pub catalog: Vec<CatalogComponent>,
    /// Presentation-ready view of the run
    pub report: MatchReport,
    pub outcome: CheckOutcome,
}

impl CheckResponse {
    pub fn new(
        components: Vec<ComponentRecord>,
        catalog: Vec<CatalogComponent>,
        report: MatchReport,
        outcome: CheckOutcome,
    ) -> Self {
        Self {
            components,
            catalog,
            report,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_matches() {
        assert!(CheckOutcome::MatchesFound(2).has_matches());
        assert!(!CheckOutcome::NoMatches.has_matches());
        assert!(!CheckOutcome::NoComponents.has_matches());
    }
}
