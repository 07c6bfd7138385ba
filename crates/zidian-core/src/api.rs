use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use zidian_types::Entry;

use crate::error::LookupError;

/// Remote dictionary lookup
#[async_trait]
pub trait LookupApi: Send + Sync {
    /// Resolve the characters in `query` into dictionary records.
    /// Thumbnails are not derived here.
    async fn lookup(&self, query: &str) -> Result<Vec<Entry>, LookupError>;
}

#[derive(Serialize)]
struct LookupRequest<'a> {
    characters_to_lookup: &'a str,
}

#[derive(Clone)]
pub struct HttpLookupApi {
    client: reqwest::Client,
    url: String,
}

impl HttpLookupApi {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl LookupApi for HttpLookupApi {
    async fn lookup(&self, query: &str) -> Result<Vec<Entry>, LookupError> {
        let response = self
            .client
            .put(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(&LookupRequest {
                characters_to_lookup: query,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.bytes().await?;
        tracing::debug!("Lookup response: {} bytes", body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}
