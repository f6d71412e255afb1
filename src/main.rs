use std::path::{Path, PathBuf};
use std::process;

use vibe_check::adapters::outbound::catalog::{CachingCatalogRepository, PatternLibraryRepository};
use vibe_check::adapters::outbound::console::StderrProgressReporter;
use vibe_check::adapters::outbound::filesystem::FileSystemReader;
use vibe_check::application::dto::{CheckRequest, OutputFormat, PatternLibrary};
use vibe_check::application::factories::{FormatterFactory, PresenterFactory};
use vibe_check::application::use_cases::CheckFileUseCase;
use vibe_check::cli::Args;
use vibe_check::component_matching::domain::Threshold;
use vibe_check::config::{self, ConfigFile};
use vibe_check::shared::error::ExitCode;
use vibe_check::shared::Result;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    // Load configuration: explicit path, else auto-discovery
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => {
            let cwd = std::env::current_dir()?;
            match config::discover_config(&cwd)? {
                Some(found) => {
                    eprintln!(
                        "📄 Auto-discovered config file: {}",
                        cwd.join(config::CONFIG_FILENAME).display()
                    );
                    found
                }
                None => ConfigFile::default(),
            }
        }
    };

    // Merge settings (CLI > config > defaults)
    let format = resolve_format(args.format, &config)?;
    let threshold = resolve_threshold(args.threshold, &config)?;
    let libraries = resolve_libraries(&config, &args.catalogs);

    // Create adapters (Dependency Injection)
    let source_reader = FileSystemReader::new();
    let catalog_repository = CachingCatalogRepository::new(
        PatternLibraryRepository::new()?.with_default_figma_token(config::figma_token_from_env()),
    );
    let progress_reporter = StderrProgressReporter::new();

    let use_case = CheckFileUseCase::new(source_reader, catalog_repository, progress_reporter);

    // Check each file; the catalog cache is shared across files.
    // A failing file is reported and the remaining files still run.
    let mut reports = Vec::with_capacity(args.files.len());
    let mut any_matches = false;
    let mut failed_files = 0usize;
    for file in &args.files {
        let request = CheckRequest::new(file.clone(), threshold, libraries.clone());
        match use_case.execute(request).await {
            Ok(response) => {
                any_matches |= response.outcome.has_matches();
                reports.push(response.report);
            }
            Err(e) => {
                failed_files += 1;
                report_file_error(file, &e);
            }
        }
    }

    if !reports.is_empty() {
        eprintln!("{}", FormatterFactory::progress_message(format));
        let formatter = FormatterFactory::create(format);
        let formatted_output = formatter.format(&reports)?;

        let presenter =
            PresenterFactory::create(PresenterFactory::presenter_type_for(args.output));
        presenter.present(&formatted_output)?;
    }

    Ok(exit_code(failed_files, any_matches, args.fail_on_match))
}

fn report_file_error(file: &Path, error: &anyhow::Error) {
    eprintln!("\n❌ Could not check {}:\n", file.display());
    eprintln!("{}", error);
    for cause in error.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }
    eprintln!();
}

/// Failed files outrank matches
fn exit_code(failed_files: usize, any_matches: bool, fail_on_match: bool) -> ExitCode {
    if failed_files > 0 {
        ExitCode::ApplicationError
    } else if any_matches && fail_on_match {
        ExitCode::MatchesFound
    } else {
        ExitCode::Success
    }
}

fn resolve_format(cli: Option<OutputFormat>, config: &ConfigFile) -> Result<OutputFormat> {
    match cli {
        Some(format) => Ok(format),
        None => Ok(config.output_format()?.unwrap_or_default()),
    }
}

fn resolve_threshold(cli: Option<f64>, config: &ConfigFile) -> Result<Threshold> {
    match cli {
        Some(value) => Threshold::new(value),
        None => Ok(config.threshold()?.unwrap_or_default()),
    }
}

/// Configured libraries followed by the `--catalog` files
fn resolve_libraries(config: &ConfigFile, catalogs: &[PathBuf]) -> Vec<PatternLibrary> {
    let mut libraries = config.pattern_libraries();
    libraries.extend(catalogs.iter().cloned().map(PatternLibrary::file));
    libraries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(format: Option<&str>, threshold: Option<f64>) -> ConfigFile {
        ConfigFile {
            format: format.map(str::to_string),
            threshold,
            ..ConfigFile::default()
        }
    }

    #[test]
    fn test_exit_code_failed_files_take_precedence() {
        assert_eq!(exit_code(1, true, true), ExitCode::ApplicationError);
        assert_eq!(exit_code(0, true, true), ExitCode::MatchesFound);
        assert_eq!(exit_code(0, true, false), ExitCode::Success);
        assert_eq!(exit_code(0, false, true), ExitCode::Success);
    }

    #[test]
    fn test_resolve_format_precedence() {
        let config = config_with(Some("json"), None);
        assert_eq!(
            resolve_format(Some(OutputFormat::Markdown), &config).unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Json);
        assert_eq!(
            resolve_format(None, &ConfigFile::default()).unwrap(),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_resolve_threshold_precedence() {
        let config = config_with(None, Some(80.0));
        assert_eq!(resolve_threshold(Some(90.0), &config).unwrap().value(), 90.0);
        assert_eq!(resolve_threshold(None, &config).unwrap().value(), 80.0);
        assert_eq!(
            resolve_threshold(None, &ConfigFile::default()).unwrap().value(),
            70.0
        );
    }

    #[test]
    fn test_resolve_threshold_rejects_invalid_cli_value() {
        let err = resolve_threshold(Some(101.0), &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid matching threshold"));
    }

    #[test]
    fn test_resolve_libraries_appends_catalog_files() {
        let libraries = resolve_libraries(
            &ConfigFile::default(),
            &[PathBuf::from("acme.json")],
        );
        assert_eq!(libraries.len(), 1);
        assert_eq!(libraries[0].id, "file:acme.json");
        assert_eq!(libraries[0].name, "acme");
    }
}
