// crates/fixdesk-client/src/api.rs

use std::time::Duration;

use fixdesk_core::{ApiCall, HttpReply, Method, Outcome, TransportError};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Url;
use thiserror::Error;

/// Anything that can answer backend calls.
///
/// The dispatcher only sees this trait, so tests can swap the HTTP
/// transport for an in-process script.
pub trait Backend: Send + Sync + 'static {
    fn execute(&self, call: ApiCall) -> BoxFuture<'static, Outcome>;
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid backend url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// `reqwest`-based transport rooted at the configured backend origin.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let base = Url::parse(base_url).map_err(|e| BackendError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(BackendError::InvalidUrl {
                url: base_url.to_string(),
                reason: "expected an http(s) origin".to_string(),
            });
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(HttpBackend { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Full URL for a call. Each path segment is percent-encoded, so an
    /// order id can never escape its `/orders/{id}` slot.
    pub fn url_for(&self, call: &ApiCall) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(call.segments());
        }
        url
    }
}

impl Backend for HttpBackend {
    fn execute(&self, call: ApiCall) -> BoxFuture<'static, Outcome> {
        let client = self.client.clone();
        let url = self.url_for(&call);

        async move {
            let mut builder = match call.method() {
                Method::Get => client.get(url),
                Method::Post => client.post(url),
            };
            if let Some(body) = call.body() {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(classify)?;
            let status = response.status().as_u16();

            // An unreadable or non-JSON body is not a transport failure:
            // the status still tells the caller what happened.
            let body = match response.bytes().await {
                Ok(bytes) => serde_json::from_slice(&bytes).ok(),
                Err(_) => None,
            };

            Ok(HttpReply::new(status, body))
        }
        .boxed()
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}
