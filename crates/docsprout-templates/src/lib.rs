//! Embedded documentation templates for docsprout.
//!
//! Holds the starter pages written into a fresh docs folder and a small
//! partial registry that renders them with minijinja.

pub mod embedded;
pub mod partials;

pub use embedded::STYLESHEET;
pub use minijinja::{context, Value};
pub use partials::{partial_name, Partials, TemplateError};
