//! Directory skeleton for a docs folder.

use std::fs;
use std::path::Path;

use crate::error::InitError;
use crate::site::SKELETON_DIRS;

/// Creates the fixed directory layout under a docs root.
pub struct FolderScaffolder;

impl FolderScaffolder {
    /// Create `content/releases`, `content/concepts`, `static` and `styles`.
    ///
    /// Missing parents are created and existing directories are left alone,
    /// so running this against an already scaffolded root succeeds.
    pub fn create_skeleton(docs_root: &Path) -> Result<(), InitError> {
        for dir in SKELETON_DIRS {
            let path = docs_root.join(dir);
            fs::create_dir_all(&path)
                .map_err(|source| InitError::DirectoryCreate { path, source })?;
        }

        Ok(())
    }
}
