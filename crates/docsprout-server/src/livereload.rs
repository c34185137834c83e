//! WebSocket live reload.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages sent to connected browsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReloadMessage {
    /// Connection established
    Connected,

    /// A file under the docs root changed; reload the page
    Reload {
        /// Changed path, relative to the docs root when possible
        path: String,
    },
}

/// Hub for broadcasting reload messages to all connected browsers.
#[derive(Debug, Clone)]
pub struct ReloadHub {
    sender: broadcast::Sender<ReloadMessage>,
}

impl ReloadHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected browsers.
    pub fn send(&self, msg: ReloadMessage) {
        // No receivers is fine
        let _ = self.sender.send(msg);
    }

    /// Subscribe to reload messages.
    pub fn subscribe(&self) -> broadcast::Receiver<ReloadMessage> {
        self.sender.subscribe()
    }

    /// Number of connected browsers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ReloadHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the client-side live-reload script connecting to `ws_url`.
pub fn reload_client_script(ws_url: &str) -> String {
    format!(
        r#"
(function() {{
  'use strict';

  var reconnectAttempts = 0;
  var maxReconnectAttempts = 10;

  function connect() {{
    var ws = new WebSocket('{}');

    ws.onopen = function() {{
      console.log('[livereload] Connected');
      reconnectAttempts = 0;
    }};

    ws.onmessage = function(event) {{
      var msg = JSON.parse(event.data);
      if (msg.type === 'reload') {{
        console.log('[livereload] Changed:', msg.path);
        location.reload();
      }}
    }};

    ws.onclose = function() {{
      if (reconnectAttempts < maxReconnectAttempts) {{
        reconnectAttempts++;
        setTimeout(connect, 1000 * reconnectAttempts);
      }}
    }};
  }}

  connect();
}})();
"#,
        ws_url
    )
}
