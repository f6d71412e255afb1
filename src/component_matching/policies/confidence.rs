use crate::component_matching::domain::Confidence;

const HIGH_CONFIDENCE_SCORE: f64 = 85.0;
const MEDIUM_CONFIDENCE_SCORE: f64 = 70.0;

impl Confidence {
    /// Buckets a combined score into a confidence tier
    ///
    /// The tiers are fixed and independent of the filtering threshold, so a
    /// pair admitted at threshold 60 can still be `Low`.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_CONFIDENCE_SCORE {
            Confidence::High
        } else if score >= MEDIUM_CONFIDENCE_SCORE {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Confidence::from_score(100.0), Confidence::High);
        assert_eq!(Confidence::from_score(85.0), Confidence::High);
        assert_eq!(Confidence::from_score(84.99), Confidence::Medium);
        assert_eq!(Confidence::from_score(70.0), Confidence::Medium);
        assert_eq!(Confidence::from_score(69.99), Confidence::Low);
        assert_eq!(Confidence::from_score(0.0), Confidence::Low);
    }
}
