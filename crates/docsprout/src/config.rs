//! Configuration loading (docsprout.toml and Cargo.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Args;
use docsprout_core::ProjectMetadata;
use serde::Deserialize;

/// Project metadata given on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct MetadataArgs {
    /// Project name
    #[arg(long)]
    pub name: Option<String>,

    /// Project version
    #[arg(long = "project-version")]
    pub version: Option<String>,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    /// Repository URL
    #[arg(long)]
    pub repository: Option<String>,
}

/// Configuration file structure (docsprout.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub project: ProjectConfig,
}

#[derive(Debug, Deserialize)]
pub struct DocsConfig {
    #[serde(default = "default_docs_dir")]
    pub dir: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            dir: default_docs_dir(),
        }
    }
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

/// The `[project]` table; every field overrides Cargo.toml.
#[derive(Debug, Deserialize, Default)]
pub struct ProjectConfig {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub repository: Option<String>,
}

/// The parts of a Cargo manifest we read.
#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<Package>,
}

/// `[package]` of a Cargo manifest.
#[derive(Debug, Deserialize, Default)]
pub struct Package {
    #[serde(default)]
    name: Option<ManifestField>,
    #[serde(default)]
    version: Option<ManifestField>,
    #[serde(default)]
    description: Option<ManifestField>,
    #[serde(default)]
    repository: Option<ManifestField>,
}

/// A package field, either set directly or inherited (`version.workspace = true`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestField {
    Value(String),
    Inherited(toml::Table),
}

impl ManifestField {
    fn value(&self) -> Option<&str> {
        match self {
            ManifestField::Value(v) => Some(v),
            ManifestField::Inherited(_) => None,
        }
    }
}

impl Package {
    fn field(field: &Option<ManifestField>) -> Option<String> {
        field.as_ref().and_then(ManifestField::value).map(str::to_string)
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Load `[package]` from a Cargo manifest if it exists.
pub fn load_manifest(path: &Path) -> Result<Option<Package>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    let manifest: Manifest = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;

    Ok(manifest.package)
}

/// Name of the directory holding `docs_dir`, used when nothing else names the project.
///
/// Relative paths are resolved against the working directory. Falls back to
/// `"docs"` when the docs dir has no named parent.
pub fn project_name_for(docs_dir: &Path) -> String {
    let absolute = docs_dir
        .canonicalize()
        .ok()
        .or_else(|| std::env::current_dir().ok().map(|cwd| cwd.join(docs_dir)));

    absolute
        .as_deref()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "docs".to_string())
}

/// Merge metadata sources: command line, then docsprout.toml, then Cargo.toml.
pub fn resolve_metadata(
    args: &MetadataArgs,
    project: &ProjectConfig,
    package: Option<&Package>,
    fallback_name: &str,
) -> ProjectMetadata {
    let from_package = |pick: fn(&Package) -> &Option<ManifestField>| {
        package.and_then(|p| Package::field(pick(p)))
    };

    let name = args
        .name
        .clone()
        .or_else(|| project.name.clone())
        .or_else(|| from_package(|p| &p.name))
        .unwrap_or_else(|| fallback_name.to_string());

    let version = args
        .version
        .clone()
        .or_else(|| project.version.clone())
        .or_else(|| from_package(|p| &p.version))
        .unwrap_or_else(|| "0.0.0".to_string());

    let description = args
        .description
        .clone()
        .or_else(|| project.description.clone())
        .or_else(|| from_package(|p| &p.description))
        .unwrap_or_default();

    let repository = args
        .repository
        .clone()
        .or_else(|| project.repository.clone())
        .or_else(|| from_package(|p| &p.repository))
        .unwrap_or_default();

    ProjectMetadata::new(name, version, description, repository)
}
