pub mod catalog;
pub mod component;
pub mod match_result;
pub mod threshold;

pub use catalog::{
    CatalogComponent, CatalogProvenance, CatalogUsage, ChildrenPattern, StructureSignature,
    UsageProp,
};
pub use component::{
    AttributeValue, ComponentId, ComponentKind, ComponentProp, ComponentRecord, PropDefault,
    SourceSpan, StructureNode,
};
pub use match_result::{
    Confidence, Difference, DifferenceCategory, MatchResult, MatchScores, ReplacementSuggestion,
    ScoreBreakdown, Severity,
};
pub use threshold::Threshold;
