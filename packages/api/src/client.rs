//! # API client
//!
//! [`ApiClient`] turns an [`Endpoint`] plus an optional bearer token into an
//! [`ApiRequest`], sends it through an [`HttpTransport`], and decodes the
//! [`RawResponse`] with [`decode`]:
//!
//! 1. `401` → [`ApiError::Unauthorized`] (message from the body if present).
//! 2. Any other non-2xx → [`ApiError::Api`], message from the JSON body, else
//!    the plain text body, else a fallback.
//! 3. 2xx with an empty body → `null`.
//! 4. 2xx that is not JSON → [`ApiError::Parse`].
//! 5. 2xx JSON reporting `success: false` → [`ApiError::Api`].
//!
//! Only then does the endpoint's adapter see the JSON.

use serde_json::Value;

use crate::endpoints::Endpoint;
use crate::envelope::{failure_message, reported_failure};
use crate::error::{ApiError, FALLBACK_MESSAGE, SESSION_EXPIRED_MESSAGE};
use crate::transport::{ApiRequest, HttpTransport, RawResponse};

/// Longest plain-text error body shown verbatim.
const MAX_TEXT_MESSAGE: usize = 200;

/// Client for one backend host.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request for `endpoint` under the role prefix `prefix`.
    pub fn request_for<E: Endpoint>(
        &self,
        prefix: &str,
        endpoint: &E,
        token: Option<&str>,
    ) -> ApiRequest {
        let path = endpoint.path();
        let url = format!(
            "{}{}/{}",
            self.base_url,
            prefix.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        ApiRequest {
            method: endpoint.method(),
            url: url.trim_end_matches('/').to_string(),
            query: endpoint.query(),
            bearer: token.map(str::to_string),
            body: endpoint.body(),
        }
    }

    /// Send the raw request and decode the body to JSON.
    pub async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        tracing::debug!("{} {}", request.method.as_str(), request.url);
        let url = request.url.clone();
        let response = self.transport.send(request).await.inspect_err(|e| {
            tracing::error!("Request to {url} failed: {e}");
        })?;
        decode(response).inspect_err(|e| match e {
            ApiError::Parse(detail) => tracing::error!("Unreadable response from {url}: {detail}"),
            other => tracing::debug!("{url} answered with an error: {other}"),
        })
    }

    /// Call `endpoint` and run its adapter over the decoded body.
    pub async fn execute<E: Endpoint>(
        &self,
        prefix: &str,
        endpoint: &E,
        token: Option<&str>,
    ) -> Result<E::Output, ApiError> {
        let body = self.send(self.request_for(prefix, endpoint, token)).await?;
        endpoint.adapt(body)
    }
}

/// Interpret a raw response.
pub fn decode(response: RawResponse) -> Result<Value, ApiError> {
    let text = response.body.trim();
    let parsed = serde_json::from_str::<Value>(text);
    let json = parsed.as_ref().ok();

    if response.status == 401 {
        let message = json
            .and_then(failure_message)
            .unwrap_or_else(|| SESSION_EXPIRED_MESSAGE.to_string());
        return Err(ApiError::Unauthorized(message));
    }

    if !response.is_success() {
        let message = json
            .and_then(failure_message)
            .or_else(|| text_message(text, json.is_some()))
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        return Err(ApiError::Api {
            status: response.status,
            message,
        });
    }

    if text.is_empty() {
        return Ok(Value::Null);
    }

    let body = parsed?;
    if let Some(message) = reported_failure(&body) {
        return Err(ApiError::Api {
            status: response.status,
            message,
        });
    }
    Ok(body)
}

/// Plain-text error bodies are shown when short and not HTML.
fn text_message(text: &str, was_json: bool) -> Option<String> {
    if was_json || text.is_empty() || text.starts_with('<') || text.len() > MAX_TEXT_MESSAGE {
        return None;
    }
    Some(text.to_string())
}
