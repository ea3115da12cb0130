//! HTTP request and response types described as plain data.
//!
//! # Design
//! Clients build `HttpRequest` values without touching the network and
//! interpret `HttpResponse` values after the fact. Only
//! [`TransportHandle::execute`](crate::TransportHandle::execute) performs I/O,
//! so request building and status handling stay deterministic and unit
//! testable.
//!
//! `HttpRequest::path` is relative to the transport's base address
//! (`/items/1`), never an absolute URL.

use crate::error::ClientError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
}

impl HttpMethod {
    /// Resolve a declared verb (`GET`, `put`, ...) to a method.
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "PUT" => Some(HttpMethod::Put),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
        }
    }
}

/// An HTTP request described as plain data. Requests carry no body; headers
/// come from the transport's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
}

impl HttpRequest {
    /// A `GET` for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
        }
    }
}

/// An HTTP response described as plain data. The body is already read to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Map any non-2xx status to `ClientError::HttpStatus`.
pub(crate) fn check_status(response: &HttpResponse) -> Result<(), ClientError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ClientError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
