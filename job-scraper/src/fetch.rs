use std::time::Duration;

use reqwest::Client;

use crate::types::{Error, Result};

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
    /// Sleep before requesting a page from a site that rate limits.
    pub politeness_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_owned(),
            timeout: Duration::from_secs(10),
            politeness_delay: Duration::from_secs(1),
        }
    }
}

pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub async fn polite_pause(&self) {
        if !self.config.politeness_delay.is_zero() {
            log::debug!("waiting {:?} before request", self.config.politeness_delay);
            tokio::time::sleep(self.config.politeness_delay).await;
        }
    }

    /// GET `url` and return the body. Any non-2xx status is an error.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        log::info!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            log::error!("Request not successful, status code: {}, url: {}", status, url);
            return Err(Error::RequestNotOk(url.to_owned(), status));
        }
        let body = resp.text().await?;
        log::debug!("fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Prefixes `https://` unless the URL already names http or https.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_owned()
    } else {
        format!("https://{}", url)
    }
}
