//! HTTP transport for the dashboard backend

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::constants::api::CONTENT_TYPE_JSON;

/// Body every configuration endpoint answers with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Seam between the submission logic and the network
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `path` and decode the reply.
    ///
    /// Error statuses still carry a JSON reply from the backend, so only
    /// connection and decoding problems are errors here.
    fn post_json(&self, path: &str, body: &Value) -> Result<ApiReply>;

    fn get_json(&self, path: &str) -> Result<Value>;
}

pub struct HttpTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn an error status into its response so the body can still be read
fn accept_status(url: &str, result: Result<ureq::Response, ureq::Error>) -> Result<ureq::Response> {
    match result {
        Ok(response) => Ok(response),
        Err(ureq::Error::Status(code, response)) => {
            warn!(code, url, "backend answered with an error status");
            Ok(response)
        }
        Err(err) => Err(err).with_context(|| format!("Request to {url} failed")),
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, path: &str, body: &Value) -> Result<ApiReply> {
        let url = self.url(path);
        debug!(url = %url, %body, "posting settings");

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", CONTENT_TYPE_JSON)
            .send_json(body);
        let response = accept_status(&url, result)?;

        response
            .into_json::<ApiReply>()
            .with_context(|| format!("Failed to decode response from {url}"))
    }

    fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        debug!(url = %url, "requesting configuration");

        let response = self
            .agent
            .get(&url)
            .call()
            .with_context(|| format!("Request to {url} failed"))?;

        response
            .into_json::<Value>()
            .with_context(|| format!("Failed to decode response from {url}"))
    }
}
