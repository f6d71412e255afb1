/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod catalog_repository;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod source_reader;

pub use catalog_repository::CatalogRepository;
pub use formatter::MatchFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use source_reader::SourceReader;
