//! Preview server for a docs root.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::sync::broadcast::error::RecvError;
use tower_http::services::ServeDir;

use docsprout_core::{GeneratorError, PREVIEW_PORT, WATCH_PORT};

use crate::livereload::{reload_client_script, ReloadHub, ReloadMessage};
use crate::watcher::FileWatcher;

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct SiteServerConfig {
    /// Directory to serve
    pub root: PathBuf,

    /// Host to bind to
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Live-reload port
    pub watch_port: u16,

    /// Open browser on start
    pub open: bool,
}

impl Default for SiteServerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("docs"),
            host: "127.0.0.1".to_string(),
            port: PREVIEW_PORT,
            watch_port: WATCH_PORT,
            open: false,
        }
    }
}

/// Shared server state.
struct ServerState {
    root: PathBuf,
    hub: ReloadHub,
    ws_url: String,
    script_url: String,
}

/// Serves a docs root and pushes reloads to connected browsers.
///
/// Two listeners are bound: the site itself on `port`, and the live-reload
/// WebSocket with its client script on `watch_port`.
pub struct SiteServer {
    config: SiteServerConfig,
}

impl SiteServer {
    pub fn new(config: SiteServerConfig) -> Self {
        Self { config }
    }

    /// Start serving. Only returns on error.
    pub async fn start(self) -> Result<(), GeneratorError> {
        let addr = socket_addr(&self.config.host, self.config.port)?;
        let watch_addr = socket_addr(&self.config.host, self.config.watch_port)?;

        let root = self
            .config
            .root
            .canonicalize()
            .map_err(|source| GeneratorError::Io {
                path: self.config.root.clone(),
                source,
            })?;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GeneratorError::Bind(addr, e.to_string()))?;
        let watch_listener = tokio::net::TcpListener::bind(watch_addr)
            .await
            .map_err(|e| GeneratorError::Bind(watch_addr, e.to_string()))?;

        let state = Arc::new(ServerState {
            root: root.clone(),
            hub: ReloadHub::new(),
            ws_url: format!("ws://{}/livereload", watch_addr),
            script_url: format!("http://{}/livereload.js", watch_addr),
        });

        let (watcher, mut rx) = FileWatcher::new(std::slice::from_ref(&root))
            .map_err(|e| GeneratorError::Watch(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                let path = event
                    .path()
                    .strip_prefix(&state_clone.root)
                    .unwrap_or(event.path())
                    .display()
                    .to_string();
                tracing::info!("Changed: {}", path);
                state_clone.hub.send(ReloadMessage::Reload { path });
            }
            // Keep watcher alive
            drop(watcher);
        });

        let site = Router::new()
            .route("/", get(index_handler))
            .route("/index.html", get(index_handler))
            .fallback_service(ServeDir::new(&root))
            .with_state(Arc::clone(&state));

        let reload = Router::new()
            .route("/livereload", get(ws_handler))
            .route("/livereload.js", get(script_handler))
            .with_state(state);

        tracing::info!("Serving {} at http://{}", root.display(), addr);
        tracing::info!("Live reload at ws://{}/livereload", watch_addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        tokio::try_join!(
            async { axum::serve(listener, site).await },
            async { axum::serve(watch_listener, reload).await },
        )
        .map_err(|e| GeneratorError::Serve(e.to_string()))?;

        Ok(())
    }
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr, GeneratorError> {
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| GeneratorError::Serve(format!("Invalid address {}:{}: {}", host, port, e)))
}

/// Insert the live-reload client before the closing `</body>` tag.
pub fn inject_reload_script(html: &str, script_url: &str) -> String {
    let tag = format!(r#"<script src="{}"></script>"#, script_url);

    match html.rfind("</body>") {
        Some(pos) => format!("{}  {}\n{}", &html[..pos], tag, &html[pos..]),
        None => format!("{}\n{}\n", html, tag),
    }
}

/// Handler for the site's index page.
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    let path = state.root.join("index.html");

    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(inject_reload_script(&html, &state.script_url)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to read {}: {}", path.display(), e),
        )
            .into_response(),
    }
}

/// Handler for the live-reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Forward reload messages to one browser until it disconnects.
async fn handle_ws(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut rx = state.hub.subscribe();
    tracing::debug!(
        "Live-reload client connected ({} total)",
        state.hub.subscriber_count()
    );

    if !send_message(&mut socket, &ReloadMessage::Connected).await {
        return;
    }

    loop {
        match rx.recv().await {
            Ok(msg) => {
                if !send_message(&mut socket, &msg).await {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!("Live-reload client lagged by {} messages", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }
}

async fn send_message(socket: &mut WebSocket, msg: &ReloadMessage) -> bool {
    let Ok(json) = serde_json::to_string(msg) else {
        return false;
    };
    socket.send(Message::Text(json.into())).await.is_ok()
}

/// Handler for the live-reload client script.
async fn script_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        reload_client_script(&state.ws_url),
    )
}
