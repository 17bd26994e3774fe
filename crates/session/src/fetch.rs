//! Fetching the remote sample images.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::SessionError;

/// Downloads a sample image's bytes.
#[async_trait]
pub trait SampleImageFetcher: Send + Sync + 'static {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, SessionError>;
}

/// Plain HTTP GET via `reqwest`. Non-2xx responses are failures.
#[derive(Debug, Clone, Default)]
pub struct HttpSampleFetcher {
    client: reqwest::Client,
}

impl HttpSampleFetcher {
    pub fn with_timeout(timeout: Duration) -> Result<Self, SessionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SessionError::SampleFetch {
                url: String::new(),
                message: format!("failed to build http client: {e}"),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SampleImageFetcher for HttpSampleFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, SessionError> {
        let fail = |e: reqwest::Error| SessionError::SampleFetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let bytes = self
            .client
            .get(url)
            .send()
            .await
            .map_err(fail)?
            .error_for_status()
            .map_err(fail)?
            .bytes()
            .await
            .map_err(fail)?;

        Ok(bytes.to_vec())
    }
}
