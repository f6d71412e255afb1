//! Configuration file support for vibe-check.
//!
//! Provides YAML-based configuration through `vibe-check.config.yml` files,
//! including data structures, file loading, validation and conversion to
//! pattern libraries.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::application::dto::{LibrarySource, OutputFormat, PatternLibrary};
use crate::component_matching::domain::Threshold;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "vibe-check.config.yml";

/// Environment variable consulted for Figma libraries without a token.
pub const FIGMA_TOKEN_ENV: &str = "FIGMA_ACCESS_TOKEN";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub threshold: Option<f64>,
    pub pattern_libraries: Option<Vec<PatternLibraryConfig>>,
    /// Directory of the loaded file; relative catalog paths resolve against it.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Kind of a configured pattern library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryKind {
    Figma,
    File,
    Builtin,
}

/// One `pattern_libraries` entry.
#[derive(Debug, Deserialize)]
pub struct PatternLibraryConfig {
    pub id: String,
    pub name: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: LibraryKind,
    pub file_key: Option<String>,
    pub access_token: Option<String>,
    #[serde(default)]
    pub node_ids: Vec<String>,
    pub path: Option<PathBuf>,
}

fn default_enabled() -> bool {
    true
}

impl PatternLibraryConfig {
    /// Converts a validated entry into a pattern library.
    fn to_pattern_library(&self, base_dir: Option<&Path>) -> PatternLibrary {
        let source = match self.kind {
            LibraryKind::Figma => LibrarySource::Figma {
                file_key: self.file_key.clone().unwrap_or_default(),
                access_token: self.access_token.clone(),
                node_ids: self.node_ids.clone(),
            },
            LibraryKind::File => {
                let path = self.path.clone().unwrap_or_default();
                let path = match base_dir {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path,
                };
                LibrarySource::File { path }
            }
            LibraryKind::Builtin => LibrarySource::Builtin,
        };

        let name = self.name.clone().unwrap_or_else(|| self.id.clone());
        PatternLibrary::new(self.id.clone(), name, source).with_enabled(self.enabled)
    }
}

impl ConfigFile {
    /// Parsed output format, if one is configured.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }

    /// Validated threshold, if one is configured.
    pub fn threshold(&self) -> Result<Option<Threshold>> {
        self.threshold.map(Threshold::new).transpose()
    }

    /// Configured pattern libraries, in file order.
    pub fn pattern_libraries(&self) -> Vec<PatternLibrary> {
        self.pattern_libraries
            .iter()
            .flatten()
            .map(|entry| entry.to_pattern_library(self.base_dir.as_deref()))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;
    config.base_dir = path.parent().map(Path::to_path_buf);

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Figma token from the environment, ignoring blank values.
pub fn figma_token_from_env() -> Option<String> {
    std::env::var(FIGMA_TOKEN_ENV)
        .ok()
        .filter(|token| !token.trim().is_empty())
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!(
                "Invalid config: {}\n\n💡 Hint: Use one of: text, json, markdown.",
                e
            );
        }
    }

    if let Some(threshold) = config.threshold {
        if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
            bail!(
                "Invalid config: threshold must be between 0 and 100 (got {}).\n\n\
                 💡 Hint: The default threshold is {}.",
                threshold,
                Threshold::DEFAULT
            );
        }
    }

    let mut seen_ids = HashSet::new();
    for (i, entry) in config.pattern_libraries.iter().flatten().enumerate() {
        if entry.id.trim().is_empty() {
            bail!(
                "Invalid config: pattern_libraries[{}].id must not be empty.\n\n\
                 💡 Hint: Give every pattern library a unique 'id' (e.g., \"acme-figma\").",
                i
            );
        }
        if !seen_ids.insert(entry.id.as_str()) {
            bail!(
                "Invalid config: duplicate pattern library id '{}'.\n\n\
                 💡 Hint: Pattern library ids must be unique.",
                entry.id
            );
        }
        match entry.kind {
            LibraryKind::Figma => {
                if entry.file_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
                    bail!(
                        "Invalid config: pattern library '{}' needs a non-empty 'file_key'.\n\n\
                         💡 Hint: The file key is the id segment of the Figma file URL.",
                        entry.id
                    );
                }
            }
            LibraryKind::File => {
                if entry
                    .path
                    .as_deref()
                    .map_or(true, |p| p.as_os_str().is_empty())
                {
                    bail!(
                        "Invalid config: pattern library '{}' needs a 'path'.\n\n\
                         💡 Hint: Point 'path' at a JSON catalog file.",
                        entry.id
                    );
                }
            }
            LibraryKind::Builtin => {}
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
