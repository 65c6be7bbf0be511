//! VK `wall.post` client
//!
//! Sends one form-encoded POST per call and maps the JSON envelope VK answers
//! with (`{"response": ...}` or `{"error": ...}`) onto our error types.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::{PlatformError, Result};
use crate::platforms::WallPoster;
use crate::types::{Account, PostRequest};

/// HTTP client for the VK wall API
pub struct VkClient {
    http: Client,
    endpoint: String,
    api_version: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    response: Option<WallPostResponse>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct WallPostResponse {
    post_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error_code: i64,
    error_msg: String,
}

impl VkClient {
    /// Build a client for the configured endpoint, API version and timeout
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Transport` if the underlying HTTP client cannot
    /// be constructed (for example when no TLS backend is available).
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let timeout = Duration::from_secs(api.timeout_secs);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                PlatformError::Transport(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            endpoint: api.endpoint.clone(),
            api_version: api.version.clone(),
            timeout,
        })
    }

    /// Form fields for one `wall.post` call
    ///
    /// `attachments` is only present when the request carries attachments.
    pub fn form_fields(
        &self,
        account: &Account,
        request: &PostRequest,
    ) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("access_token", account.token().to_string()),
            ("owner_id", account.owner_id().to_string()),
            ("message", request.message.clone()),
            ("v", self.api_version.clone()),
        ];
        if let Some(attachments) = &request.attachments {
            fields.push(("attachments", attachments.clone()));
        }
        fields
    }

    fn map_transport_error(&self, error: reqwest::Error) -> PlatformError {
        if error.is_timeout() {
            PlatformError::Transport(format!(
                "request timed out after {}s",
                self.timeout.as_secs()
            ))
        } else if error.is_connect() {
            PlatformError::Transport(format!(
                "failed to connect to {}: {}",
                self.endpoint, error
            ))
        } else {
            PlatformError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl WallPoster for VkClient {
    async fn post(&self, account: &Account, request: &PostRequest) -> Result<i64> {
        let fields = self.form_fields(account, request);
        debug!(
            owner_id = account.owner_id(),
            endpoint = %self.endpoint,
            has_attachments = request.attachments.is_some(),
            "Sending wall.post"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .form(&fields)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            return Err(PlatformError::HttpStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let post_id = parse_wall_post_response(&body)?;
        info!(owner_id = account.owner_id(), post_id, "Posted to wall");
        Ok(post_id)
    }

    fn name(&self) -> &str {
        "vk"
    }
}

/// Extract the post id from a `wall.post` response body
///
/// An `error` object wins over everything else and is returned verbatim.
fn parse_wall_post_response(body: &str) -> Result<i64> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|e| {
        PlatformError::MalformedResponse(format!("unexpected response body: {}", e))
    })?;

    if let Some(error) = envelope.error {
        return Err(PlatformError::Api {
            code: error.error_code,
            message: error.error_msg,
        }
        .into());
    }

    match envelope.response.and_then(|r| r.post_id) {
        Some(post_id) => Ok(post_id),
        None => {
            Err(PlatformError::MalformedResponse("missing response.post_id".to_string()).into())
        }
    }
}
