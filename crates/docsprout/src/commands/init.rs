//! Initialize documentation in a project.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docsprout_core::{InitOutcome, SiteInitializer};
use docsprout_server::Docsify;

use crate::config::{self, MetadataArgs};

/// Run the init command.
pub async fn run(config_path: &Path, dir: Option<PathBuf>, args: MetadataArgs) -> Result<()> {
    let file_config = config::load_config(config_path)?;
    let docs_dir = dir.unwrap_or_else(|| PathBuf::from(&file_config.docs.dir));

    let manifest = config::load_manifest(Path::new("Cargo.toml"))?;
    let metadata = config::resolve_metadata(
        &args,
        &file_config.project,
        manifest.as_ref(),
        &config::project_name_for(&docs_dir),
    );

    tracing::info!(
        "Initializing documentation for {} in {}",
        metadata.name,
        docs_dir.display()
    );

    let mut initializer = SiteInitializer::new(Docsify::new());
    let outcome = initializer
        .initialize(&docs_dir, &metadata)
        .with_context(|| format!("Failed to initialize {}", docs_dir.display()))?;

    match outcome {
        InitOutcome::AlreadyInitialized => {
            tracing::debug!("{} is already initialized", docs_dir.display());
        }
        InitOutcome::Scaffolded(report) if report.is_complete() => {
            tracing::info!("Initialization complete!");
            tracing::info!("Run 'docsprout serve' to preview the documentation.");
        }
        InitOutcome::Scaffolded(report) => {
            tracing::warn!(
                "{} of {} files could not be written",
                report.failed.len(),
                report.failed.len() + report.written.len()
            );
        }
    }

    Ok(())
}
