//! Documentation folder scaffolding and site initialization.
//!
//! Lays out a fixed docs skeleton, renders the starter pages once and hands
//! serving off to a pluggable [`SiteGenerator`].

pub mod error;
pub mod generator;
pub mod initializer;
pub mod metadata;
pub mod preview;
pub mod scaffold;
pub mod site;

pub use error::InitError;
pub use generator::{BootstrapOptions, GeneratorError, ServeOptions, SiteGenerator, Theme};
pub use initializer::{InitOutcome, InitReport, SiteInitializer, WriteFailure};
pub use metadata::ProjectMetadata;
pub use preview::{PreviewServer, PREVIEW_PORT, WATCH_PORT};
pub use scaffold::FolderScaffolder;
