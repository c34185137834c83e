//! Errors raised while initializing a docs folder.

use std::path::PathBuf;

use docsprout_templates::TemplateError;

use crate::generator::GeneratorError;

/// Errors that abort [`SiteInitializer::initialize`](crate::SiteInitializer::initialize).
///
/// Failures writing the generated pages are not part of this type; they are
/// logged and collected in the [`InitReport`](crate::InitReport) instead.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {}: {source}", .path.display())]
    FileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Site generator failed to bootstrap: {0}")]
    Bootstrap(#[from] GeneratorError),

    #[error(transparent)]
    Render(#[from] TemplateError),
}
