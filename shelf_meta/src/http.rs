use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch `url` and return the response body. Non-success statuses are errors.
    async fn get(&self, url: &str) -> Result<String>;
}

pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json,text/javascript;q=0.9,*/*;q=0.8"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("ko,ko-KR;q=0.9,en;q=0.8"),
        );

        let mut builder = Client::builder()
            .user_agent(concat!("shelf_meta/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .gzip(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().context("build http client")?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<String> {
        let res = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(res)
    }
}
