use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::fetchers::Fetcher;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// [`Fetcher`] backed by a reqwest client
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with reqwest's default client settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher from an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Create a fetcher honouring the user agent and timeout of `config`
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| ScrapeError::Config(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Sends a GET request and rejects non-success statuses
    async fn send(&self, url: &str) -> Result<Response> {
        let parsed = Url::parse(url).map_err(|e| ScrapeError::fetch(url, e))?;

        ::log::debug!("GET {}", parsed);
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| ScrapeError::fetch(url, e))?;

        ::log::debug!("{} responded with {}", url, response.status());
        response
            .error_for_status()
            .map_err(|e| ScrapeError::fetch(url, e))
    }
}

impl Fetcher for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.send(url).await?;
        response.text().await.map_err(|e| ScrapeError::fetch(url, e))
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.send(url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScrapeError::fetch(url, e))?;
        Ok(bytes.to_vec())
    }
}
