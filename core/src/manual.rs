//! Manual adapter: a hand-written client that builds `GET /items/{id}`
//! itself, checks the status and reads the body, exposed through
//! [`ApiClient`].
//!
//! # Design
//! `ManualItemsClient` keeps the build/parse split explicit:
//! `build_get_item` produces an `HttpRequest` without I/O,
//! `parse_get_item` interprets the `HttpResponse`, and `get_item` runs the
//! round-trip through the transport in between.

use async_trait::async_trait;
use tracing::instrument;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::http::{check_status, HttpRequest, HttpResponse};
use crate::transport::TransportHandle;

#[derive(Debug, Clone)]
pub struct ManualItemsClient {
    transport: TransportHandle,
}

impl ManualItemsClient {
    pub fn new(transport: TransportHandle) -> Self {
        Self { transport }
    }

    pub fn build_get_item(&self, id: i64) -> HttpRequest {
        HttpRequest::get(format!("/items/{id}"))
    }

    /// Fails with `HttpStatus` for anything but 2xx; never returns an error
    /// body as if it were the item.
    pub fn parse_get_item(&self, response: HttpResponse) -> Result<String, ClientError> {
        check_status(&response)?;
        Ok(response.body)
    }

    pub async fn get_item(&self, id: i64) -> Result<String, ClientError> {
        let request = self.build_get_item(id);
        let response = self.transport.execute(request).await?;
        self.parse_get_item(response)
    }
}

#[derive(Debug, Clone)]
pub struct ManualApiClient {
    client: ManualItemsClient,
}

impl ManualApiClient {
    pub fn new(transport: TransportHandle) -> Self {
        Self {
            client: ManualItemsClient::new(transport),
        }
    }
}

#[async_trait]
impl ApiClient for ManualApiClient {
    #[instrument(name = "manual_get_item", skip(self))]
    async fn get_item(&self, id: i64) -> Result<String, ClientError> {
        self.client.get_item(id).await
    }
}
