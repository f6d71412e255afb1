//! Weighted structural similarity between user and catalog components

mod explanation;


use super::similarity;
use crate::component_matching::domain::{
    CatalogComponent, ComponentRecord, Confidence, MatchResult, ScoreBreakdown, Threshold,
};
use crate::component_matching::policies::ScoringWeights;

/// Scores every (user, catalog) pair and keeps those above a threshold
///
/// The matcher holds only configuration; it is cheap to build and safe to
/// share between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralMatcher {
    weights: ScoringWeights,
    threshold: Threshold,
}

impl StructuralMatcher {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            weights: ScoringWeights::default(),
            threshold,
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Scores one pair without filtering
    pub fn score(&self, user: &ComponentRecord, catalog: &CatalogComponent) -> ScoreBreakdown {
        let signature = catalog.signature();
        let user_types = user.element_types();

        self.weights.combine(
            similarity::name_similarity(user.name(), catalog.name()),
            similarity::element_type_similarity(&user_types, signature.element_types()),
            similarity::prop_similarity(user.prop_names(), signature.prop_patterns()),
            similarity::complexity_similarity(
                user.complexity(),
                similarity::estimate_catalog_complexity(signature),
            ),
        )
    }

    /// Finds catalog components similar to each user component
    ///
    /// Every pair is scored before filtering. Results are ordered by
    /// combined score, highest first; equal scores keep encounter order
    /// (user component first, then catalog order).
    ///
    /// # Arguments
    /// * `users` - Components extracted from one source file
    /// * `catalog` - Validated catalog components
    ///
    /// # Returns
    /// Match results borrowing from both inputs; empty if either is empty
    pub fn find_matches<'a>(
        &self,
        users: &'a [ComponentRecord],
        catalog: &'a [CatalogComponent],
    ) -> Vec<MatchResult<'a>> {
        let mut results = Vec::new();

        for user in users {
            for catalog_component in catalog {
                let breakdown = self.score(user, catalog_component);
                if !self.threshold.admits(breakdown.structural) {
                    continue;
                }
                results.push(build_match(user, catalog_component, breakdown));
            }
        }

        results.sort_by(|a, b| b.scores().combined.cmp(&a.scores().combined));
        results
    }
}

/// Matches extracted components against a catalog with default weights
///
/// The threshold is validated by construction, so matching itself cannot
/// fail.
pub fn match_components<'a>(
    users: &'a [ComponentRecord],
    catalog: &'a [CatalogComponent],
    threshold: Threshold,
) -> Vec<MatchResult<'a>> {
    StructuralMatcher::new(threshold).find_matches(users, catalog)
}

fn build_match<'a>(
    user: &'a ComponentRecord,
    catalog: &'a CatalogComponent,
    breakdown: ScoreBreakdown,
) -> MatchResult<'a> {
    let user_types = user.element_types();
    let reasons = explanation::match_reasons(user, catalog, &breakdown, &user_types);
    let differences = explanation::differences(user, catalog, &user_types);
    let replacement = explanation::replacement(user, catalog);

    MatchResult::new(
        user,
        catalog,
        breakdown,
        Confidence::from_score(breakdown.structural),
        reasons,
        differences,
        replacement,
    )
}
