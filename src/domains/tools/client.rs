//! Controller API client.
//!
//! Issues one HTTP request per tool invocation against the controller's base
//! URL and hands back the raw response body. No retries, no caching and no
//! timeout beyond reqwest's defaults.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use super::descriptor::{HttpMethod, RequestSpec};
use crate::core::config::ControllerConfig;

/// Errors returned by the controller client.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The controller answered with a status outside 2xx.
    #[error("{method} {path} returned {status}: {body}")]
    Status {
        method: HttpMethod,
        path: String,
        status: u16,
        body: String,
    },

    /// The request never produced a response (refused, DNS, bad URL...).
    #[error("request {method} {path}: {}", error_chain(.source))]
    Request {
        method: HttpMethod,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read.
    #[error("read response of {method} {path}: {}", error_chain(.source))]
    Read {
        method: HttpMethod,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// Render an error followed by every cause in its source chain.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Something that can execute a [`RequestSpec`] against the controller.
#[async_trait]
pub trait ControllerApi: Send + Sync {
    /// Send the request, returning the raw body of a 2xx response.
    async fn send(&self, request: &RequestSpec) -> Result<Vec<u8>, ControllerError>;
}

/// reqwest-backed controller client.
#[derive(Debug, Clone)]
pub struct ControllerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ControllerClient {
    /// Create a client for the given base URL (e.g. `http://127.0.0.1:8765`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ControllerError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ControllerError::Build)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ControllerConfig) -> Result<Self, ControllerError> {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl ControllerApi for ControllerClient {
    async fn send(&self, request: &RequestSpec) -> Result<Vec<u8>, ControllerError> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, %url, "Sending controller request");

        let mut builder = self.http.request(reqwest_method(request.method), &url);
        if let Some(body) = &request.body {
            // Serializes the body and sets Content-Type: application/json.
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| ControllerError::Request {
                method: request.method,
                path: request.path.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ControllerError::Read {
                method: request.method,
                path: request.path.clone(),
                source,
            })?;

        if !status.is_success() {
            return Err(ControllerError::Status {
                method: request.method,
                path: request.path.clone(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        debug!(status = status.as_u16(), bytes = body.len(), "Controller responded");
        Ok(body.to_vec())
    }
}
