use std::future::Future;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    /// Failure reported by an `HttpClient` that is not backed by reqwest.
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Single best-effort GET returning the raw response body.
///
/// Implementations must not retry and must not validate the body. A non-2xx
/// status is not an error at this level: its body is handed back and is left
/// to fail JSON parsing downstream.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<String, HttpError>> + Send;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<String, HttpError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} answered with HTTP {}", url, status);
        }

        Ok(response.text().await?)
    }
}
