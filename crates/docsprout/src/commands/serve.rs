//! Preview server command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docsprout_core::PreviewServer;
use docsprout_server::Docsify;

use crate::config;

/// Run the serve command.
pub async fn run(config_path: &Path, dir: Option<PathBuf>) -> Result<()> {
    let file_config = config::load_config(config_path)?;
    let docs_dir = dir.unwrap_or_else(|| PathBuf::from(&file_config.docs.dir));

    PreviewServer::new(Docsify::new())
        .serve(&docs_dir)
        .await
        .with_context(|| format!("Failed to serve {}", docs_dir.display()))?;

    Ok(())
}
