//! vibe-check - find React components that duplicate a design system
//!
//! This library extracts component definitions from React source files and
//! scores them against a catalog of design-system components, reporting the
//! hand-written components that could be replaced by an existing one.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`component_matching`): Component records, catalog
//!   records, extraction and structural matching
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use vibe_check::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let source_reader = FileSystemReader::new();
//! let catalog_repository = CachingCatalogRepository::new(PatternLibraryRepository::new()?);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = CheckFileUseCase::new(source_reader, catalog_repository, progress_reporter);
//!
//! // Execute against the built-in sample design system
//! let request = CheckRequest::new(
//!     PathBuf::from("src/CustomButton.tsx"),
//!     Threshold::default(),
//!     vec![PatternLibrary::builtin()],
//! );
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let output = TextFormatter::new().format(&[response.report])?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The matcher can also be used directly on extracted components:
//!
//! ```
//! use vibe_check::prelude::*;
//!
//! let source = "export const Tag = ({ label }) => <span>{label}</span>;";
//! let components = extract_components(source, "Tag.tsx");
//! assert_eq!(components[0].name(), "Tag");
//!
//! let catalog = BuiltinCatalog::load().unwrap();
//! let matches = match_components(&components, &catalog, Threshold::default());
//! assert!(matches.iter().all(|m| m.scores().combined >= 70));
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod component_matching;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{
        BuiltinCatalog, CachingCatalogRepository, PatternLibraryRepository,
    };
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::network::FigmaClient;
    pub use crate::application::dto::{
        CheckOutcome, CheckRequest, CheckResponse, LibrarySource, OutputFormat, PatternLibrary,
    };
    pub use crate::application::read_models::MatchReport;
    pub use crate::application::use_cases::CheckFileUseCase;
    pub use crate::component_matching::domain::{
        CatalogComponent, ComponentRecord, Confidence, MatchResult, Threshold,
    };
    pub use crate::component_matching::policies::ScoringWeights;
    pub use crate::component_matching::services::{
        extract_components, match_components, ComponentExtractor, StructuralMatcher,
    };
    pub use crate::ports::outbound::{
        CatalogRepository, MatchFormatter, OutputPresenter, ProgressReporter, SourceReader,
    };
    pub use crate::shared::Result;
}
