//! Local preview of a docs root.

use std::path::Path;

use crate::generator::{GeneratorError, ServeOptions, SiteGenerator};

/// HTTP port of the preview server.
pub const PREVIEW_PORT: u16 = 3000;

/// Port of the live-reload channel.
pub const WATCH_PORT: u16 = 54320;

/// Serves a docs root through a [`SiteGenerator`] with fixed settings.
pub struct PreviewServer<G> {
    generator: G,
}

impl<G: SiteGenerator> PreviewServer<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Settings every preview runs with: no browser, port 3000, live reload on 54320.
    pub fn options() -> ServeOptions {
        ServeOptions {
            open: false,
            port: PREVIEW_PORT,
            watch_port: WATCH_PORT,
        }
    }

    /// Serve `docs_root` until the process is terminated.
    ///
    /// Startup failures such as an occupied port are returned unchanged.
    pub async fn serve(&self, docs_root: &Path) -> Result<(), GeneratorError> {
        self.generator.serve(docs_root, &Self::options()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::BootstrapOptions;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingGenerator {
        serves: Arc<Mutex<Vec<(PathBuf, ServeOptions)>>>,
        bind_error: bool,
    }

    impl SiteGenerator for RecordingGenerator {
        fn bootstrap(&self, _target: &Path, _options: &BootstrapOptions) -> Result<(), GeneratorError> {
            Ok(())
        }

        async fn serve(&self, root: &Path, options: &ServeOptions) -> Result<(), GeneratorError> {
            self.serves
                .lock()
                .unwrap()
                .push((root.to_path_buf(), options.clone()));

            if self.bind_error {
                let addr: SocketAddr = ([127, 0, 0, 1], options.port).into();
                return Err(GeneratorError::Bind(addr, "address in use".to_string()));
            }

            Ok(())
        }
    }

    #[tokio::test]
    async fn delegates_once_with_fixed_options() {
        let generator = RecordingGenerator::default();
        let server = PreviewServer::new(generator.clone());

        server.serve(Path::new("/some/path")).await.unwrap();

        let calls = generator.serves.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, PathBuf::from("/some/path"));
        assert_eq!(
            calls[0].1,
            ServeOptions {
                open: false,
                port: 3000,
                watch_port: 54320,
            }
        );
    }

    #[tokio::test]
    async fn startup_failures_propagate() {
        let generator = RecordingGenerator {
            bind_error: true,
            ..Default::default()
        };
        let server = PreviewServer::new(generator);

        let result = server.serve(Path::new("/some/path")).await;

        assert!(matches!(result, Err(GeneratorError::Bind(addr, _)) if addr.port() == 3000));
    }
}
