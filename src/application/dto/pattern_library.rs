use std::path::PathBuf;

/// Where a pattern library's components come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibrarySource {
    /// Components of a Figma file, fetched over the REST API
    Figma {
        file_key: String,
        access_token: Option<String>,
        /// Restricts the library to these component node ids when non-empty
        node_ids: Vec<String>,
    },
    /// A local JSON catalog file
    File { path: PathBuf },
    /// The sample catalog shipped with the tool
    Builtin,
}

impl LibrarySource {
    pub fn kind(&self) -> &'static str {
        match self {
            LibrarySource::Figma { .. } => "figma",
            LibrarySource::File { .. } => "file",
            LibrarySource::Builtin => "builtin",
        }
    }
}

/// A configured design-system catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternLibrary {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub source: LibrarySource,
}

impl PatternLibrary {
    pub const BUILTIN_ID: &'static str = "builtin";

    pub fn new(id: impl Into<String>, name: impl Into<String>, source: LibrarySource) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
            source,
        }
    }

    /// The built-in sample design system
    pub fn builtin() -> Self {
        Self::new(
            Self::BUILTIN_ID,
            "Built-in sample design system",
            LibrarySource::Builtin,
        )
    }

    /// A library backed by a local catalog file; the path doubles as id
    pub fn file(path: PathBuf) -> Self {
        let id = format!("file:{}", path.display());
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(id, name, LibrarySource::File { path })
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
