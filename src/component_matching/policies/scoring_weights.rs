use crate::component_matching::domain::ScoreBreakdown;
use crate::shared::error::VibeCheckError;
use crate::shared::Result;

/// Relative weight of each similarity factor
///
/// Weights always sum to 100, so a pair scoring 100 on every factor
/// scores exactly 100 overall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    name: f64,
    element_types: f64,
    props: f64,
    complexity: f64,
}

impl ScoringWeights {
    const TOTAL: f64 = 100.0;

    /// Creates custom weights
    ///
    /// # Errors
    /// Returns `VibeCheckError::Validation` if any weight is negative or not
    /// finite, or if the weights do not sum to 100.
    pub fn new(name: f64, element_types: f64, props: f64, complexity: f64) -> Result<Self> {
        let weights = [name, element_types, props, complexity];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(VibeCheckError::Validation {
                message: "scoring weights must be finite and non-negative".to_string(),
            }
            .into());
        }
        let sum: f64 = weights.iter().sum();
        if (sum - Self::TOTAL).abs() > 1e-9 {
            return Err(VibeCheckError::Validation {
                message: format!("scoring weights must sum to 100, got {}", sum),
            }
            .into());
        }
        Ok(Self {
            name,
            element_types,
            props,
            complexity,
        })
    }

    pub fn name(&self) -> f64 {
        self.name
    }

    pub fn element_types(&self) -> f64 {
        self.element_types
    }

    pub fn props(&self) -> f64 {
        self.props
    }

    pub fn complexity(&self) -> f64 {
        self.complexity
    }

    /// Weighted sum of four 0..=100 factor scores
    pub fn combine(
        &self,
        name: f64,
        element_types: f64,
        props: f64,
        complexity: f64,
    ) -> ScoreBreakdown {
        let structural = (name * self.name
            + element_types * self.element_types
            + props * self.props
            + complexity * self.complexity)
            / Self::TOTAL;

        ScoreBreakdown {
            name,
            element_types,
            props,
            complexity,
            structural,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name: 20.0,
            element_types: 40.0,
            props: 30.0,
            complexity: 10.0,
        }
    }
}
