use crate::application::dto::{CheckOutcome, CheckRequest, CheckResponse, PatternLibrary};
use crate::application::read_models::MatchReportBuilder;
use crate::component_matching::domain::{CatalogComponent, ComponentRecord};
use crate::component_matching::services::{
    ComponentExtractor, DiagnosticKind, Extraction, StructuralMatcher,
};
use crate::ports::outbound::{CatalogRepository, ProgressReporter, SourceReader};
use crate::shared::error::VibeCheckError;
use crate::shared::Result;
use futures::future::join_all;
use std::path::Path;

/// File extensions the extractor understands
const SUPPORTED_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// CheckFileUseCase - Analyses one source file against the configured catalogs
///
/// This use case orchestrates the check workflow using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `SR` - SourceReader implementation
/// * `CR` - CatalogRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckFileUseCase<SR, CR, PR> {
    source_reader: SR,
    catalog_repository: CR,
    progress_reporter: PR,
    extractor: ComponentExtractor,
}

impl<SR, CR, PR> CheckFileUseCase<SR, CR, PR>
where
    SR: SourceReader,
    CR: CatalogRepository,
    PR: ProgressReporter,
{
    /// Creates a new CheckFileUseCase with injected dependencies
    pub fn new(source_reader: SR, catalog_repository: CR, progress_reporter: PR) -> Self {
        Self {
            source_reader,
            catalog_repository,
            progress_reporter,
            extractor: ComponentExtractor::new(),
        }
    }

    /// Executes the check for one file
    ///
    /// # Arguments
    /// * `request` - File to check, threshold and configured libraries
    ///
    /// # Returns
    /// CheckResponse with the extracted components, the catalog used and the
    /// match report. An empty outcome is not an error.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file is not a JavaScript/TypeScript source file
    /// - The file cannot be read
    /// - The catalog contains a malformed record
    /// - The built-in fallback catalog cannot be loaded
    pub async fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        // Step 1: Validate and read the source file
        Self::ensure_supported_file(&request.file_path)?;
        let display_path = request.file_path.display().to_string();
        self.progress_reporter
            .report(&format!("🔍 Analyzing {}", display_path));
        let source = self.source_reader.read_source(&request.file_path)?;

        // Step 2: Extract components
        let extraction = self.extractor.extract(&source, &display_path);
        self.report_extraction(&extraction);

        if extraction.components.is_empty() {
            self.progress_reporter
                .report_completion("No React components found in this file");
            let report = MatchReportBuilder::build(
                &display_path,
                request.threshold,
                &[],
                &[],
                &[],
                &extraction.diagnostics,
            );
            return Ok(CheckResponse::new(
                Vec::new(),
                Vec::new(),
                report,
                CheckOutcome::NoComponents,
            ));
        }

        // Step 3: Acquire and validate the catalog
        let catalog = self.load_catalog(&request.libraries).await?;
        Self::validate_catalog(&catalog)?;

        // Step 4: Match
        let components = extraction.components;
        let matcher = StructuralMatcher::new(request.threshold);
        let matches = matcher.find_matches(&components, &catalog);

        let outcome = if matches.is_empty() {
            self.progress_reporter.report_completion(&format!(
                "No similar components found (threshold {})",
                request.threshold
            ));
            CheckOutcome::NoMatches
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ Found {} potential duplicate(s) in the design system",
                matches.len()
            ));
            CheckOutcome::MatchesFound(matches.len())
        };

        // Step 5: Build the read model
        let report = MatchReportBuilder::build(
            &display_path,
            request.threshold,
            &components,
            &catalog,
            &matches,
            &extraction.diagnostics,
        );

        Ok(CheckResponse::new(components, catalog, report, outcome))
    }

    fn ensure_supported_file(path: &Path) -> Result<()> {
        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);

        if !supported {
            return Err(VibeCheckError::UnsupportedFile {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    fn report_extraction(&self, extraction: &Extraction) {
        for diagnostic in &extraction.diagnostics {
            let prefix = match diagnostic.kind {
                DiagnosticKind::UnparsableSource => "❌ Could not parse file",
                DiagnosticKind::UnresolvedStructure => "⚠️  Warning",
            };
            self.progress_reporter
                .report_error(&format!("{}: {}", prefix, diagnostic.message));
        }

        if extraction.components.is_empty() {
            return;
        }

        self.progress_reporter.report(&format!(
            "✅ Found {} component(s)",
            extraction.components.len()
        ));
        for component in &extraction.components {
            self.progress_reporter.report(&Self::describe(component));
        }
    }

    fn describe(component: &ComponentRecord) -> String {
        format!(
            "   - {} ({}, line {}, {} prop(s), complexity {})",
            component.name(),
            component.kind(),
            component.span().start_line,
            component.props().len(),
            component.complexity()
        )
    }

    /// Fetches all enabled libraries concurrently
    ///
    /// A failing library is reported and skipped. When no library is
    /// enabled, or every enabled library comes back empty, the built-in
    /// sample catalog is used instead.
    async fn load_catalog(&self, libraries: &[PatternLibrary]) -> Result<Vec<CatalogComponent>> {
        let enabled: Vec<&PatternLibrary> = libraries.iter().filter(|l| l.enabled).collect();

        let mut catalog = Vec::new();
        if !enabled.is_empty() {
            self.progress_reporter.report(&format!(
                "📚 Fetching {} pattern library(ies)...",
                enabled.len()
            ));

            let fetches = enabled
                .iter()
                .map(|library| self.catalog_repository.fetch_catalog(library));
            let results = join_all(fetches).await;

            let total = results.len();
            for (index, (library, result)) in enabled.iter().zip(results).enumerate() {
                self.progress_reporter
                    .report_progress(index + 1, total, Some(library.name.as_str()));
                match result {
                    Ok(components) => catalog.extend(components),
                    Err(e) => self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Skipping pattern library '{}': {}",
                        library.name, e
                    )),
                }
            }
        }

        if catalog.is_empty() {
            self.progress_reporter
                .report("📦 Using the built-in sample design system");
            catalog = self
                .catalog_repository
                .fetch_catalog(&PatternLibrary::builtin())
                .await?;
        }

        self.progress_reporter.report(&format!(
            "✅ Loaded {} catalog component(s)",
            catalog.len()
        ));
        Ok(catalog)
    }

    fn validate_catalog(catalog: &[CatalogComponent]) -> Result<()> {
        for component in catalog {
            component.validate()?;
        }
        Ok(())
    }
}
