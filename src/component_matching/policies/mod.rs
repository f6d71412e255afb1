mod confidence;
mod scoring_weights;

pub use scoring_weights::ScoringWeights;
