//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own data directory.

use super::constants::*;
use super::fixtures::{create_test_data_dir, create_test_responses};
use async_trait::async_trait;
use songbot_server::corpus::load_corpora;
use songbot_server::dispatch::Dispatcher;
use songbot_server::recommend::RecommendationSelector;
use songbot_server::responses::{ResponseComposer, ResponseTable};
use songbot_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use songbot_server::signal::{
    EngineError, KeywordEngine, LexiconSentimentEngine, SentimentEngine, SentimentLabel,
    SignalExtractor, TagSet, VocabularyKeywordEngine,
};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Engine that is always down
struct UnavailableEngine;

#[async_trait]
impl SentimentEngine for UnavailableEngine {
    async fn classify(&self, _text: &str) -> Result<SentimentLabel, EngineError> {
        Err(EngineError::Unavailable("test engine is down".to_string()))
    }
}

#[async_trait]
impl KeywordEngine for UnavailableEngine {
    async fn extract(&self, _text: &str) -> Result<TagSet, EngineError> {
        Err(EngineError::Unavailable("test engine is down".to_string()))
    }
}

/// Which engines back the test server's extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSetup {
    /// Lexicon sentiment and vocabulary keywords
    Local,
    /// The sentiment engine always fails
    SentimentDown,
    /// The keyword engine always fails
    KeywordsDown,
}

/// Test server instance with isolated corpora
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    // Private fields - keep resources alive until drop
    _temp_data_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a test server with local engines on a random port
    pub async fn spawn() -> Self {
        Self::spawn_with(EngineSetup::Local).await
    }

    /// Spawns a new test server on a random port
    ///
    /// This function:
    /// 1. Writes the test corpora and response table to a temp directory
    /// 2. Loads them the same way the binary does
    /// 3. Binds to a random port (127.0.0.1:0)
    /// 4. Spawns the server in a background task
    /// 5. Waits for the server to be ready
    ///
    /// # Panics
    ///
    /// Panics if fixture creation, loading, or port binding fails, or if the
    /// server doesn't become ready within timeout.
    pub async fn spawn_with(engines: EngineSetup) -> Self {
        let temp_data_dir = create_test_data_dir().expect("Failed to create test data dir");
        let responses_path =
            create_test_responses(temp_data_dir.path()).expect("Failed to write responses");

        let corpora = Arc::new(load_corpora(temp_data_dir.path()).expect("Failed to load corpora"));
        let table = ResponseTable::load(&responses_path).expect("Failed to load responses");

        let sentiment_engine: Arc<dyn SentimentEngine> = match engines {
            EngineSetup::SentimentDown => Arc::new(UnavailableEngine),
            _ => Arc::new(LexiconSentimentEngine),
        };
        let keyword_engine: Arc<dyn KeywordEngine> = match engines {
            EngineSetup::KeywordsDown => Arc::new(UnavailableEngine),
            _ => Arc::new(VocabularyKeywordEngine),
        };

        let dispatcher = Arc::new(Dispatcher::new(
            SignalExtractor::new(sentiment_engine, keyword_engine),
            RecommendationSelector::new(corpora.clone()),
            ResponseComposer::new(Arc::new(table)),
        ));

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            ..Default::default()
        };
        let app = make_app(config, corpora, dispatcher);

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            _temp_data_dir: temp_data_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home page
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
