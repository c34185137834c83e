//! Interface to the static-site generator that bootstraps and serves a docs root.

use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Built-in site themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Vue,
    Buble,
    Dark,
    Pure,
}

impl Theme {
    /// Stylesheet file name of the theme.
    pub fn stylesheet(&self) -> &'static str {
        match self {
            Theme::Vue => "vue.css",
            Theme::Buble => "buble.css",
            Theme::Dark => "dark.css",
            Theme::Pure => "pure.css",
        }
    }
}

/// Options for bootstrapping a new site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapOptions {
    /// Reference generator assets from `node_modules` instead of the CDN
    pub local: bool,

    /// Theme to link from the generated page
    pub theme: Theme,
}

/// Options for serving a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeOptions {
    /// Open a browser once the server is listening
    pub open: bool,

    /// HTTP port
    pub port: u16,

    /// Live-reload port
    pub watch_port: u16,
}

/// Errors reported by a [`SiteGenerator`].
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No site found at {}. Run 'docsprout init' first.", .0.display())]
    NotInitialized(PathBuf),

    #[error("Failed to bind to {0}: {1}")]
    Bind(SocketAddr, String),

    #[error("Server error: {0}")]
    Serve(String),

    #[error("File watch error: {0}")]
    Watch(String),
}

/// A static-site generator that can lay down its default files and serve a site.
pub trait SiteGenerator: Send + Sync {
    /// Write the generator's default files into `target`.
    fn bootstrap(&self, target: &Path, options: &BootstrapOptions) -> Result<(), GeneratorError>;

    /// Serve `root` until the process is terminated.
    fn serve(
        &self,
        root: &Path,
        options: &ServeOptions,
    ) -> impl Future<Output = Result<(), GeneratorError>> + Send;
}
