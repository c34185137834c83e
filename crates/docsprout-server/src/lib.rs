//! Docsify site generator with a live-reload preview server.
//!
//! [`Docsify`] implements [`docsprout_core::SiteGenerator`]: it writes the
//! default docsify landing files and serves a docs root over HTTP, reloading
//! connected browsers whenever a file under the root changes.

pub mod docsify;
pub mod livereload;
pub mod server;
pub mod watcher;

pub use docsify::Docsify;
pub use livereload::{ReloadHub, ReloadMessage};
pub use server::{SiteServer, SiteServerConfig};
pub use watcher::{FileWatcher, WatchEvent};
