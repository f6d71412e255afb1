/// Filesystem adapters for file I/O operations
mod catalog_file;
mod file_reader;
mod file_writer;

pub use catalog_file::load_catalog_file;
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
