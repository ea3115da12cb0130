//! Two interchangeable clients for the items API.
//!
//! # Overview
//! Both clients fetch `GET /items/{id}` and return the body as text. They
//! differ only in how the call is produced:
//!
//! - [`ProxyApiClient`] wraps a client generated by [`declare_api!`] from a
//!   declarative route description.
//! - [`ManualApiClient`] wraps a hand-written client that builds the request,
//!   checks the status and reads the body itself.
//!
//! Both implement [`ApiClient`], so callers can swap one for the other.
//!
//! # Design
//! - Every client owns its own [`TransportHandle`]; nothing is shared.
//! - Requests and responses are plain data ([`HttpRequest`], [`HttpResponse`]);
//!   only the transport does I/O.
//! - Errors are a single [`ClientError`] enum, split coarsely into
//!   construction and call failures by [`ClientError::kind`]. Nothing is
//!   retried or recovered.

pub mod client;
pub mod config;
mod declare;
pub mod error;
pub mod http;
pub mod manual;
pub mod proxy;
pub mod route;
pub mod transport;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use manual::{ManualApiClient, ManualItemsClient};
pub use proxy::{ItemsApi, ProxyApiClient};
pub use transport::TransportHandle;
