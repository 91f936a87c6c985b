//! JSON-over-HTTP client for the remote document database.
//!
//! The database exposes a Firebase-RTDB-style REST interface: every node is
//! addressable as `{base}/{path}.json`, `GET` on a missing node returns a
//! JSON `null` body, `PATCH` merges object fields server-side.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Method};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Upstream request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Total attempts for read paths. Writes are single-attempt.
const READ_ATTEMPTS: u32 = 3;

/// Pause between read retries.
const RETRY_BACKOFF: Duration = Duration::from_millis(200);

/// Configuration for connecting to the remote database.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Database base URL, e.g. `"https://example.firebaseio.com"`.
    pub database_url: String,
}

/// Errors that can occur when talking to the remote store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned a non-2xx response or unexpected body.
    #[error("unexpected response from store: {0}")]
    UnexpectedResponse(String),
}

/// Operations the services need from the remote document store.
#[automock]
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Fetch the node at `path`. A missing node is `Value::Null`, not an
    /// error.
    async fn get_json(&self, path: &str) -> Result<Value, StoreError>;

    /// Replace the node at `path`.
    async fn put_json(&self, path: &str, value: &Value) -> Result<(), StoreError>;

    /// Shallow-merge `value` into the object node at `path`.
    async fn patch_json(&self, path: &str, value: &Value) -> Result<(), StoreError>;

    /// Delete the node at `path`. Deleting a missing node succeeds.
    async fn delete(&self, path: &str) -> Result<(), StoreError>;
}

/// HTTP client for the remote database REST interface.
#[derive(Debug, Clone)]
pub struct FirebaseClient {
    config: FirebaseConfig,
    http: Client,
}

impl FirebaseClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: FirebaseConfig) -> Result<Self, StoreError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { config, http })
    }

    fn node_url(&self, path: &str) -> String {
        format!(
            "{}/{}.json",
            self.config.database_url.trim_end_matches('/'),
            path.trim_matches('/')
        )
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, StoreError> {
        let url = self.node_url(path);

        let mut request = self.http.request(method.clone(), &url);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(StoreError::UnexpectedResponse(format!(
                "{method} {url} failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl StoreClient for FirebaseClient {
    async fn get_json(&self, path: &str) -> Result<Value, StoreError> {
        let mut last_error = None;

        for attempt in 1..=READ_ATTEMPTS {
            match self.send(Method::GET, path, None).await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    warn!("read of {path} failed on attempt {attempt}: {error}");

                    last_error = Some(error);
                }
            }

            if attempt < READ_ATTEMPTS {
                tokio::time::sleep(RETRY_BACKOFF).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            StoreError::UnexpectedResponse("read failed without an error".to_string())
        }))
    }

    async fn put_json(&self, path: &str, value: &Value) -> Result<(), StoreError> {
        self.send(Method::PUT, path, Some(value)).await.map(|_| ())
    }

    async fn patch_json(&self, path: &str, value: &Value) -> Result<(), StoreError> {
        self.send(Method::PATCH, path, Some(value))
            .await
            .map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), StoreError> {
        self.send(Method::DELETE, path, None).await.map(|_| ())
    }
}
