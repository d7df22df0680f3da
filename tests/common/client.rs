//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per server endpoint.
//! When routes or query formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get_with_message(&self, path: &str, msg: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("msg", msg)])
            .send()
            .await
            .expect("Request failed")
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // Chat Endpoints
    // ========================================================================

    /// GET /get?msg=
    pub async fn chat(&self, msg: &str) -> Response {
        self.get_with_message("/get", msg).await
    }

    /// GET /get-songs?msg=
    pub async fn mood_songs(&self, msg: &str) -> Response {
        self.get_with_message("/get-songs", msg).await
    }

    /// GET /get with no query string at all
    pub async fn chat_without_message(&self) -> Response {
        self.get("/get").await
    }

    // ========================================================================
    // JSON Endpoints
    // ========================================================================

    /// GET /v1/chat?msg=
    pub async fn chat_json(&self, msg: &str) -> Response {
        self.get_with_message("/v1/chat", msg).await
    }

    /// GET /v1/songs?msg=
    pub async fn mood_songs_json(&self, msg: &str) -> Response {
        self.get_with_message("/v1/songs", msg).await
    }

    /// GET /v1/stats
    pub async fn stats(&self) -> Response {
        self.get("/v1/stats").await
    }

    // ========================================================================
    // Static Content
    // ========================================================================

    /// GET /
    pub async fn home(&self) -> Response {
        self.get("/").await
    }
}
