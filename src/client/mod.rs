//! HTTP client wrapper: default headers, bearer-token auth, form or JSON
//! request bodies, and normalized responses.
mod build;


use std::collections::BTreeMap;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::error::HttpError;

use build::{build_target_url, encode_body, layer_headers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Body encoding selected at client construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    Form,
    Json,
}

/// Default connection options shared by every request the client issues.
#[derive(Debug, Clone, Copy)]
pub struct ClientOptions {
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(10_000),
        }
    }
}

/// Normalized outcome of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientResponse {
    pub status: u16,
    pub message: String,
    pub body: String,
}

/// Client bound to one base endpoint.
///
/// Headers are layered per call, later wins: defaults, then content
/// headers when a body is present, then `authorization` when a token is
/// set, then caller overrides. Header names are case-sensitive here; the
/// transport normalizes them on the wire.
#[derive(Debug)]
pub struct HttpClient {
    base_url: String,
    mode: BodyMode,
    inner: reqwest::Client,
    default_headers: BTreeMap<String, String>,
    token: Option<String>,
    debug: bool,
}

impl HttpClient {
    /// Builds a client for `base_url`, whose scheme selects plaintext or
    /// TLS transport.
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` is not an absolute http(s) URL or
    /// the underlying client cannot be constructed.
    pub fn new(base_url: &str, mode: BodyMode, options: ClientOptions) -> Result<Self, HttpError> {
        let parsed = Url::parse(base_url).map_err(|err| HttpError::InvalidUrl {
            url: base_url.to_owned(),
            source: err,
        })?;
        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(HttpError::UnsupportedScheme {
                scheme: scheme.to_owned(),
            });
        }
        let inner = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|err| HttpError::BuildClientFailed { source: err })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            mode,
            inner,
            default_headers: BTreeMap::new(),
            token: None,
            debug: true,
        })
    }

    pub const fn set_debug(&mut self, flag: bool) {
        self.debug = flag;
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Last write wins; the key is case-sensitive.
    pub fn add_default_header(&mut self, name: &str, value: &str) {
        self.default_headers
            .insert(name.to_owned(), value.to_owned());
    }

    pub fn remove_default_header(&mut self, name: &str) {
        self.default_headers.remove(name);
    }

    /// Issues one request and resolves it once the response body has been
    /// fully received. Exactly one `Ok` or `Err` per call; no retries.
    ///
    /// # Errors
    ///
    /// Returns an error when the target URL cannot be formed, the body
    /// cannot be serialized in the configured mode, or the transport
    /// fails before the response ends.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        overrides: &[(String, String)],
    ) -> Result<ClientResponse, HttpError> {
        let url = build_target_url(&self.base_url, path, query)?;
        let payload = body
            .map(|value| encode_body(self.mode, value))
            .transpose()?;
        let headers = layer_headers(
            &self.default_headers,
            self.mode,
            payload.as_deref(),
            self.token.as_deref(),
            overrides,
        );

        let mut builder = match method {
            Method::Get => self.inner.get(url.clone()),
            Method::Post => self.inner.post(url.clone()),
            Method::Put => self.inner.put(url.clone()),
            Method::Patch => self.inner.patch(url.clone()),
            Method::Delete => self.inner.delete(url.clone()),
        };
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        if let Some(payload) = payload {
            builder = builder.body(payload);
        }
        let request = builder
            .build()
            .map_err(|err| HttpError::BuildRequestFailed { source: err })?;

        match self.execute(request).await {
            Ok(response) => {
                if self.debug {
                    debug!(
                        "{} {} -> {} {}",
                        method.as_str(),
                        url,
                        response.status,
                        response.message
                    );
                }
                Ok(response)
            }
            Err(err) => {
                if self.debug {
                    debug!("{} {} -> {}", method.as_str(), url, err);
                }
                Err(err)
            }
        }
    }

    /// Convenience wrapper for a body-less GET.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
        overrides: &[(String, String)],
    ) -> Result<ClientResponse, HttpError> {
        self.request(Method::Get, path, query, None, overrides).await
    }

    /// Convenience wrapper for a POST in the configured body mode.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post(
        &self,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        overrides: &[(String, String)],
    ) -> Result<ClientResponse, HttpError> {
        self.request(Method::Post, path, query, body, overrides)
            .await
    }

    async fn execute(&self, request: reqwest::Request) -> Result<ClientResponse, HttpError> {
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(|err| HttpError::Transport { source: err })?;
        let status = response.status();
        let message = status.canonical_reason().unwrap_or_default().to_owned();
        let body = drain_body(response)
            .await
            .map_err(|err| HttpError::Transport { source: err })?;
        Ok(ClientResponse {
            status: status.as_u16(),
            message,
            body,
        })
    }
}

async fn drain_body(response: reqwest::Response) -> Result<String, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut body = String::new();
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        body.push_str(&String::from_utf8_lossy(&bytes));
    }
    Ok(body)
}
