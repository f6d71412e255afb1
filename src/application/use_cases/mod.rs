mod check_file;

pub use check_file::CheckFileUseCase;
