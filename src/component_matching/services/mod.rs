pub mod component_extractor;
pub mod similarity;
pub mod structural_matcher;

pub use component_extractor::{
    extract_components, ComponentExtractor, DiagnosticKind, Extraction, ExtractionDiagnostic,
};
pub use structural_matcher::{match_components, StructuralMatcher};
