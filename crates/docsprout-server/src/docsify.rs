//! Native docsify generator.

use std::fs;
use std::path::Path;

use docsprout_core::{BootstrapOptions, GeneratorError, ServeOptions, SiteGenerator};

use crate::server::{SiteServer, SiteServerConfig};

const CDN_BASE: &str = "//cdn.jsdelivr.net/npm/docsify@4";
const LOCAL_BASE: &str = "node_modules/docsify";

const README: &str = "# Headline\n\n> An awesome project.\n";

/// Generator that lays down docsify's default files and serves docsify sites.
#[derive(Debug, Clone, Default)]
pub struct Docsify;

impl Docsify {
    pub fn new() -> Self {
        Self
    }
}

impl SiteGenerator for Docsify {
    /// Write `index.html`, `README.md` and `.nojekyll` into `target`.
    ///
    /// A target that already has an `index.html` is left untouched.
    fn bootstrap(&self, target: &Path, options: &BootstrapOptions) -> Result<(), GeneratorError> {
        fs::create_dir_all(target).map_err(|source| GeneratorError::Io {
            path: target.to_path_buf(),
            source,
        })?;

        let index = target.join("index.html");
        if index.exists() {
            tracing::warn!(
                "{} already exists, skipping docsify bootstrap",
                index.display()
            );
            return Ok(());
        }

        write(&index, &index_html(options))?;
        write(&target.join("README.md"), README)?;
        write(&target.join(".nojekyll"), "")?;

        tracing::info!("Bootstrapped docsify site in {}", target.display());

        Ok(())
    }

    async fn serve(&self, root: &Path, options: &ServeOptions) -> Result<(), GeneratorError> {
        if !root.join("index.html").exists() {
            return Err(GeneratorError::NotInitialized(root.to_path_buf()));
        }

        let config = SiteServerConfig {
            root: root.to_path_buf(),
            port: options.port,
            watch_port: options.watch_port,
            open: options.open,
            ..SiteServerConfig::default()
        };

        SiteServer::new(config).start().await
    }
}

fn write(path: &Path, content: &str) -> Result<(), GeneratorError> {
    fs::write(path, content).map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Default docsify landing page for the given options.
pub fn index_html(options: &BootstrapOptions) -> String {
    let (theme, script) = if options.local {
        (
            format!("{}/lib/themes/{}", LOCAL_BASE, options.theme.stylesheet()),
            format!("{}/lib/docsify.min.js", LOCAL_BASE),
        )
    } else {
        (
            format!("{}/lib/themes/{}", CDN_BASE, options.theme.stylesheet()),
            CDN_BASE.to_string(),
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Document</title>
  <meta http-equiv="X-UA-Compatible" content="IE=edge,chrome=1" />
  <meta name="description" content="Description">
  <meta name="viewport" content="width=device-width, initial-scale=1.0, minimum-scale=1.0">
  <link rel="stylesheet" href="{}">
</head>
<body>
  <div id="app"></div>
  <script>
    window.$docsify = {{
      name: '',
      repo: ''
    }}
  </script>
  <script src="{}"></script>
</body>
</html>
"#,
        theme, script
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsprout_core::Theme;
    use tempfile::tempdir;

    #[test]
    fn bootstrap_writes_default_files() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("docs");

        Docsify::new()
            .bootstrap(&target, &BootstrapOptions::default())
            .unwrap();

        let index = fs::read_to_string(target.join("index.html")).unwrap();
        assert!(index.contains("//cdn.jsdelivr.net/npm/docsify@4/lib/themes/vue.css"));
        assert!(index.contains(r#"<script src="//cdn.jsdelivr.net/npm/docsify@4"></script>"#));
        assert_eq!(fs::read_to_string(target.join("README.md")).unwrap(), README);
        assert!(target.join(".nojekyll").is_file());
    }

    #[test]
    fn local_bootstrap_uses_node_modules() {
        let html = index_html(&BootstrapOptions {
            local: true,
            theme: Theme::Dark,
        });

        assert!(html.contains(r#"href="node_modules/docsify/lib/themes/dark.css""#));
        assert!(html.contains(r#"src="node_modules/docsify/lib/docsify.min.js""#));
    }

    #[test]
    fn bootstrap_leaves_existing_site_alone() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "mine").unwrap();

        Docsify::new()
            .bootstrap(temp.path(), &BootstrapOptions::default())
            .unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("index.html")).unwrap(),
            "mine"
        );
        assert!(!temp.path().join("README.md").exists());
    }

    #[test]
    fn serve_requires_initialized_root() {
        let temp = tempdir().unwrap();
        let options = ServeOptions {
            open: false,
            port: 3000,
            watch_port: 54320,
        };

        let result = tokio_test::block_on(Docsify::new().serve(temp.path(), &options));

        assert!(matches!(result, Err(GeneratorError::NotInitialized(_))));
    }

    #[tokio::test]
    async fn serve_reports_busy_port() {
        let temp = tempdir().unwrap();
        Docsify::new()
            .bootstrap(temp.path(), &BootstrapOptions::default())
            .unwrap();

        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = occupied.local_addr().unwrap().port();
        let options = ServeOptions {
            open: false,
            port,
            watch_port: 0,
        };

        let result = Docsify::new().serve(temp.path(), &options).await;

        assert!(matches!(result, Err(GeneratorError::Bind(addr, _)) if addr.port() == port));
    }
}
