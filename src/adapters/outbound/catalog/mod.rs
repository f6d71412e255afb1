/// Catalog adapters resolving pattern libraries to design-system components
mod builtin_catalog;
mod caching_catalog_repository;
mod pattern_library_repository;

pub use builtin_catalog::BuiltinCatalog;
pub use caching_catalog_repository::CachingCatalogRepository;
pub use pattern_library_repository::PatternLibraryRepository;
