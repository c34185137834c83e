//! Project metadata used to fill in the starter pages.

use serde::{Deserialize, Serialize};

/// Describes the project being documented.
///
/// Values are passed through to the templates untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Project name
    pub name: String,

    /// Current version
    pub version: String,

    /// One-line description
    pub description: String,

    /// Link to the source repository
    #[serde(alias = "repository")]
    pub repository_url: String,
}

impl ProjectMetadata {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
        repository_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
            repository_url: repository_url.into(),
        }
    }
}
