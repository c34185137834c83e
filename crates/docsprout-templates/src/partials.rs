//! Partial registry backed by minijinja.

use minijinja::{Environment, ErrorKind, UndefinedBehavior, Value};

use crate::embedded::PARTIALS;

/// Errors that can occur when rendering partials.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Partials have not been registered; cannot render '{0}'")]
    NotRegistered(String),

    #[error("Unknown partial: {0}")]
    UnknownPartial(String),

    #[error("Invalid partial '{name}': {source}")]
    Invalid {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to render partial '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Named partials that can be rendered with an optional context.
///
/// Registration is an explicit step guarded by a flag, so calling
/// [`Partials::register_partials`] more than once is harmless.
pub struct Partials {
    env: Environment<'static>,
    registered: bool,
}

impl Partials {
    /// Create an empty registry. Nothing renders until partials are registered.
    pub fn new() -> Self {
        let mut env = Environment::new();

        // A partial referencing a variable its context lacks is a bug, not an empty string.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);

        Self {
            env,
            registered: false,
        }
    }

    /// Register every embedded partial. Subsequent calls are no-ops.
    pub fn register_partials(&mut self) -> Result<(), TemplateError> {
        if self.registered {
            return Ok(());
        }

        for &(name, source) in PARTIALS {
            self.env
                .add_template(name, source)
                .map_err(|e| TemplateError::Invalid {
                    name: name.to_string(),
                    source: e,
                })?;
        }

        self.registered = true;
        tracing::debug!("Registered {} partials", PARTIALS.len());

        Ok(())
    }

    /// Whether [`Partials::register_partials`] has run.
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Render a partial.
    ///
    /// `reference` is either a bare partial name (`coverpage`) or a partial
    /// reference of the form `{{>coverpage}}`. Pass `Value::UNDEFINED` or an
    /// empty `context!{}` for partials that take no context.
    pub fn compile_partial(&self, reference: &str, context: Value) -> Result<String, TemplateError> {
        let name = partial_name(reference);

        if !self.registered {
            return Err(TemplateError::NotRegistered(name.to_string()));
        }

        let tmpl = self.env.get_template(name).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                TemplateError::UnknownPartial(name.to_string())
            } else {
                TemplateError::Render {
                    name: name.to_string(),
                    source: e,
                }
            }
        })?;

        tmpl.render(context).map_err(|source| TemplateError::Render {
            name: name.to_string(),
            source,
        })
    }
}

impl Default for Partials {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a partial reference to the partial's name.
///
/// `{{>sidebar}}`, `{{> sidebar }}` and `sidebar` all resolve to `sidebar`.
pub fn partial_name(reference: &str) -> &str {
    let trimmed = reference.trim();

    trimmed
        .strip_prefix("{{")
        .and_then(|rest| rest.strip_suffix("}}"))
        .map(|inner| inner.trim())
        .and_then(|inner| inner.strip_prefix('>'))
        .map(str::trim)
        .unwrap_or(trimmed)
}
