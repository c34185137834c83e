//! One-time initialization of a docs folder.

use std::fs;
use std::path::{Path, PathBuf};

use docsprout_templates::{context, Partials, Value, STYLESHEET};

use crate::error::InitError;
use crate::generator::{BootstrapOptions, SiteGenerator, Theme};
use crate::metadata::ProjectMetadata;
use crate::scaffold::FolderScaffolder;
use crate::site::{PageContext, Source, MARKER_FILE, PLACEHOLDER_FILE, TEMPLATE_SET};

/// A generated file that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    /// Destination path
    pub path: PathBuf,
    /// Underlying I/O error message
    pub message: String,
}

/// Files written by a first initialization.
#[derive(Debug, Clone, Default)]
pub struct InitReport {
    /// Paths written successfully, in write order
    pub written: Vec<PathBuf>,

    /// Writes that failed; the remaining writes were still attempted
    pub failed: Vec<WriteFailure>,
}

impl InitReport {
    /// True when every file was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// What [`SiteInitializer::initialize`] did.
#[derive(Debug, Clone)]
pub enum InitOutcome {
    /// The marker file was present; nothing was touched.
    AlreadyInitialized,

    /// The docs root was scaffolded and the starter pages written.
    Scaffolded(InitReport),
}

/// Scaffolds a docs root and writes the starter pages once.
pub struct SiteInitializer<G> {
    generator: G,
    partials: Partials,
}

impl<G: SiteGenerator> SiteInitializer<G> {
    /// Create an initializer that bootstraps through `generator`.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            partials: Partials::new(),
        }
    }

    /// Whether the template partials have been registered.
    pub fn partials_registered(&self) -> bool {
        self.partials.is_registered()
    }

    /// Initialize `docs_root` unless it already holds an `index.html`.
    ///
    /// An initialized root is left alone without any output. Otherwise the
    /// skeleton is created, the generator bootstraps the site, its placeholder
    /// README is removed and every starter page is rendered and written.
    ///
    /// Directory creation, bootstrap, placeholder removal and rendering fail
    /// fast. Each file write is attempted independently: a failed write is
    /// logged and recorded in the returned [`InitReport`].
    pub fn initialize(
        &mut self,
        docs_root: &Path,
        metadata: &ProjectMetadata,
    ) -> Result<InitOutcome, InitError> {
        let is_initialized = docs_root.join(MARKER_FILE).exists();

        self.partials.register_partials()?;

        if is_initialized {
            return Ok(InitOutcome::AlreadyInitialized);
        }

        FolderScaffolder::create_skeleton(docs_root)?;

        self.generator.bootstrap(
            docs_root,
            &BootstrapOptions {
                local: false,
                theme: Theme::Vue,
            },
        )?;

        let placeholder = docs_root.join(PLACEHOLDER_FILE);
        if placeholder.exists() {
            fs::remove_file(&placeholder).map_err(|source| InitError::FileRemove {
                path: placeholder.clone(),
                source,
            })?;
        }

        let mut rendered = Vec::with_capacity(TEMPLATE_SET.len());
        for entry in TEMPLATE_SET {
            rendered.push((entry.outputs, self.render(entry.source, metadata)?));
        }

        let mut report = InitReport::default();
        for (outputs, content) in rendered {
            for relative in outputs {
                write_file(docs_root.join(relative), &content, &mut report);
            }
        }

        Ok(InitOutcome::Scaffolded(report))
    }

    fn render(&self, source: Source, metadata: &ProjectMetadata) -> Result<String, InitError> {
        let (name, page) = match source {
            Source::Stylesheet => return Ok(STYLESHEET.to_string()),
            Source::Partial { name, context } => (name, context),
        };

        let ctx: Value = match page {
            PageContext::Empty => context! {},
            PageContext::Home => context! {
                name => &metadata.name,
                repo => &metadata.repository_url,
            },
            PageContext::Cover => context! {
                name => &metadata.name,
                version => &metadata.version,
                description => &metadata.description,
            },
        };

        Ok(self.partials.compile_partial(name, ctx)?)
    }
}

fn write_file(path: PathBuf, content: &str, report: &mut InitReport) {
    match fs::write(&path, content) {
        Ok(()) => {
            tracing::info!("Created {}", path.display());
            report.written.push(path);
        }
        Err(e) => {
            tracing::error!("Failed to write {}: {}", path.display(), e);
            report.failed.push(WriteFailure {
                path,
                message: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GeneratorError, ServeOptions};
    use crate::site::{generated_files, SKELETON_DIRS};
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    /// Mimics a generator bootstrap: writes a placeholder page and README.
    #[derive(Clone, Default)]
    struct FakeGenerator {
        bootstraps: Arc<Mutex<Vec<(PathBuf, BootstrapOptions)>>>,
        remove_after_bootstrap: Option<&'static str>,
        fail: bool,
    }

    impl SiteGenerator for FakeGenerator {
        fn bootstrap(
            &self,
            target: &Path,
            options: &BootstrapOptions,
        ) -> Result<(), GeneratorError> {
            self.bootstraps
                .lock()
                .unwrap()
                .push((target.to_path_buf(), options.clone()));

            if self.fail {
                return Err(GeneratorError::Io {
                    path: target.to_path_buf(),
                    source: std::io::Error::other("boom"),
                });
            }

            fs::write(target.join("index.html"), "<html>placeholder</html>").unwrap();
            fs::write(target.join("README.md"), "# Headline").unwrap();

            if let Some(dir) = self.remove_after_bootstrap {
                fs::remove_dir_all(target.join(dir)).unwrap();
            }

            Ok(())
        }

        async fn serve(&self, _root: &Path, _options: &ServeOptions) -> Result<(), GeneratorError> {
            Ok(())
        }
    }

    fn acme() -> ProjectMetadata {
        ProjectMetadata::new("Acme", "1.2.3", "desc", "https://x")
    }

    fn scaffolded(outcome: InitOutcome) -> InitReport {
        match outcome {
            InitOutcome::Scaffolded(report) => report,
            InitOutcome::AlreadyInitialized => panic!("expected a scaffolded root"),
        }
    }

    #[test]
    fn writes_every_file_on_first_run() {
        let temp = tempdir().unwrap();
        let mut initializer = SiteInitializer::new(FakeGenerator::default());

        let report = scaffolded(initializer.initialize(temp.path(), &acme()).unwrap());

        assert!(report.is_complete());
        assert_eq!(report.written.len(), 14);
        for file in generated_files() {
            assert!(temp.path().join(file).is_file(), "{file} missing");
        }
        for dir in SKELETON_DIRS {
            assert!(temp.path().join(dir).is_dir(), "{dir} missing");
        }
    }

    #[test]
    fn bootstraps_with_vue_theme() {
        let temp = tempdir().unwrap();
        let generator = FakeGenerator::default();
        let mut initializer = SiteInitializer::new(generator.clone());

        initializer.initialize(temp.path(), &acme()).unwrap();

        let calls = generator.bootstraps.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, temp.path());
        assert_eq!(calls[0].1.theme, Theme::Vue);
        assert!(!calls[0].1.local);
    }

    #[test]
    fn propagates_metadata_into_pages() {
        let temp = tempdir().unwrap();
        let mut initializer = SiteInitializer::new(FakeGenerator::default());

        initializer.initialize(temp.path(), &acme()).unwrap();

        let index = fs::read_to_string(temp.path().join("index.html")).unwrap();
        assert!(index.contains("Acme"));
        assert!(index.contains("https://x"));
        assert!(!index.contains("<html>placeholder</html>"));

        let cover = fs::read_to_string(temp.path().join("_coverpage.md")).unwrap();
        assert!(cover.contains("Acme"));
        assert!(cover.contains("1.2.3"));
        assert!(cover.contains("desc"));
    }

    #[test]
    fn removes_placeholder_readme() {
        let temp = tempdir().unwrap();
        let mut initializer = SiteInitializer::new(FakeGenerator::default());

        initializer.initialize(temp.path(), &acme()).unwrap();

        assert!(!temp.path().join("README.md").exists());
    }

    #[test]
    fn writes_identical_sidebars_and_bundled_stylesheet() {
        let temp = tempdir().unwrap();
        let mut initializer = SiteInitializer::new(FakeGenerator::default());

        initializer.initialize(temp.path(), &acme()).unwrap();

        let root = fs::read_to_string(temp.path().join("_sidebar.md")).unwrap();
        for nested in [
            "content/_sidebar.md",
            "content/concepts/_sidebar.md",
            "content/releases/_sidebar.md",
        ] {
            assert_eq!(fs::read_to_string(temp.path().join(nested)).unwrap(), root);
        }

        let css = fs::read_to_string(temp.path().join("styles/override.css")).unwrap();
        assert_eq!(css, STYLESHEET);
    }

    #[test]
    fn second_run_is_a_silent_no_op() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "custom").unwrap();
        let generator = FakeGenerator::default();
        let mut initializer = SiteInitializer::new(generator.clone());
        assert!(!initializer.partials_registered());

        let outcome = initializer.initialize(temp.path(), &acme()).unwrap();

        assert!(matches!(outcome, InitOutcome::AlreadyInitialized));
        assert!(initializer.partials_registered());
        assert!(generator.bootstraps.lock().unwrap().is_empty());
        assert_eq!(
            fs::read_to_string(temp.path().join("index.html")).unwrap(),
            "custom"
        );
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn initializes_only_once() {
        let temp = tempdir().unwrap();
        let generator = FakeGenerator::default();
        let mut initializer = SiteInitializer::new(generator.clone());

        initializer.initialize(temp.path(), &acme()).unwrap();
        fs::write(temp.path().join("_coverpage.md"), "edited").unwrap();
        let outcome = initializer.initialize(temp.path(), &acme()).unwrap();

        assert!(matches!(outcome, InitOutcome::AlreadyInitialized));
        assert_eq!(generator.bootstraps.lock().unwrap().len(), 1);
        assert_eq!(
            fs::read_to_string(temp.path().join("_coverpage.md")).unwrap(),
            "edited"
        );
    }

    #[test]
    fn keeps_writing_after_a_failed_write() {
        let temp = tempdir().unwrap();
        let generator = FakeGenerator {
            remove_after_bootstrap: Some("content/concepts"),
            ..Default::default()
        };
        let mut initializer = SiteInitializer::new(generator);

        let report = scaffolded(initializer.initialize(temp.path(), &acme()).unwrap());

        assert!(!report.is_complete());
        let failed: Vec<_> = report
            .failed
            .iter()
            .map(|f| f.path.strip_prefix(temp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            failed,
            vec![
                PathBuf::from("content/concepts/_sidebar.md"),
                PathBuf::from("content/concepts/concept_one.md"),
                PathBuf::from("content/concepts/concept_two.md"),
            ]
        );
        assert_eq!(report.written.len(), 11);
        assert!(temp.path().join("content/releases/0.0.1.md").is_file());
        assert!(temp.path().join("styles/override.css").is_file());
    }

    #[test]
    fn bootstrap_failure_propagates() {
        let temp = tempdir().unwrap();
        let generator = FakeGenerator {
            fail: true,
            ..Default::default()
        };
        let mut initializer = SiteInitializer::new(generator);

        let result = initializer.initialize(temp.path(), &acme());

        assert!(matches!(result, Err(InitError::Bootstrap(_))));
        assert!(temp.path().join("content/releases").is_dir());
        assert!(!temp.path().join("index.html").exists());
    }

    #[test]
    fn scaffolding_failure_propagates() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("static"), "file in the way").unwrap();
        let generator = FakeGenerator::default();
        let mut initializer = SiteInitializer::new(generator.clone());

        let result = initializer.initialize(temp.path(), &acme());

        assert!(matches!(result, Err(InitError::DirectoryCreate { .. })));
        assert!(generator.bootstraps.lock().unwrap().is_empty());
    }
}
