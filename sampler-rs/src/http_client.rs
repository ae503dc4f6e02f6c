use reqwest::Client as ReqwestClient;
use serde_json::Value;
use std::time::Duration;

use crate::constants::CLIENT_TIMEOUT_SECS;
use crate::errors::SamplerError;

pub(crate) struct HttpClient {
    client: ReqwestClient,
    base_url: String,
}

impl HttpClient {
    pub(crate) fn new(base_url: &str) -> Result<Self, SamplerError> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(CLIENT_TIMEOUT_SECS))
            .build()
            .map_err(|e| SamplerError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the JSON body served at `path`, or FetchData if the request or decoding fails.
    pub(crate) async fn fetch_json(&self, path: &str) -> Result<Value, SamplerError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| SamplerError::FetchData(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| SamplerError::FetchData(e.to_string()))
    }
}
