//! The transport handle: a pooled `reqwest` client bound to one base address.
//!
//! # Design
//! A `TransportHandle` is built once per adapter and never mutated afterwards.
//! It is the only place in the crate that performs network I/O. Status codes
//! are returned as data; deciding what counts as success is up to the client
//! that built the request.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub struct TransportHandle {
    client: reqwest::Client,
    base: Url,
}

impl TransportHandle {
    /// Validate the base address and default headers and build the client.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base = parse_base_address(&config.base_address)?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let invalid = |reason: String| ClientError::InvalidHeader {
                name: name.clone(),
                reason,
            };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
            headers.append(header_name, header_value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ClientError::TransportInit)?;

        debug!(base = %base, headers = config.default_headers.len(), "transport ready");
        Ok(Self { client, base })
    }

    pub fn base_address(&self) -> &Url {
        &self.base
    }

    /// Append `path` to the base address, keeping any path prefix the base
    /// address carries.
    pub fn resolve(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let prefix = self.base.path().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        url.set_path(&format!("{prefix}/{path}"));
        url
    }

    /// Execute one request and read the whole body as text.
    ///
    /// Only failures that prevent a response (connect, TLS, timeout, body
    /// read) are errors here; a 404 is an `Ok` response with status 404.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let url = self.resolve(&request.path);
        debug!(method = request.method.as_str(), %url, "sending request");

        let builder = self.client.request(to_reqwest_method(request.method), url.clone());

        let transport_error = |source: reqwest::Error| {
            warn!(%url, error = %source, "request failed");
            ClientError::Transport {
                url: url.to_string(),
                source,
            }
        };

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        debug!(status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}

fn parse_base_address(address: &str) -> Result<Url, ClientError> {
    let invalid = |reason: &str| ClientError::InvalidBaseAddress {
        address: address.to_string(),
        reason: reason.to_string(),
    };

    let mut url = Url::parse(address).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(invalid("address has no host"));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Put => Method::PUT,
    }
}
