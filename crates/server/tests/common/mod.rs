//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `sermon-meta-server`
//! integration tests.
//!
//! - `TestApp`: spawns a real server on a random port, configured from a temporary
//!   `config.yml` whose provider URL points at an `httpmock::MockServer`.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::MockServer;
use reqwest::Client;
use sermon_meta_server::{
    config,
    router,
    state::{build_app_state, AppState},
};
use std::{fs::File, io::Write, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

/// The path the mock upstream serves the Messages API on.
pub const MESSAGES_PATH: &str = "/v1/messages";

// --- Full Application Test Harness ---

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();

        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
provider:
  api_url: "{}"
  api_key: "test-api-key"
  model: "mock-chat-model"
"#,
            mock_server.url(MESSAGES_PATH)
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let config = config::get_config(Some(config_path.to_str().unwrap()))?;
        let app_state = build_app_state(config).await?;
        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state: app_state_for_harness,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// The full URL of the metadata endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate-metadata", self.address)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
