//! Proxy-style adapter: a client generated by [`declare_api!`](crate::declare_api)
//! from the declaration `GET "/items/{id}"`, exposed through [`ApiClient`].

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::transport::TransportHandle;

crate::declare_api! {
    /// Generated client for the items resource.
    pub struct ItemsApi {
        /// `GET /items/{id}`, body returned as text.
        GET "/items/{id}" => fn get_item(id: i64) -> String;
    }
}

#[derive(Debug, Clone)]
pub struct ProxyApiClient {
    api: ItemsApi,
}

impl ProxyApiClient {
    /// Build the proxy once. Fails only if the route declaration is malformed.
    pub fn new(transport: TransportHandle) -> Result<Self, ClientError> {
        let api = ItemsApi::new(transport)?;
        debug!("proxy client ready");
        Ok(Self { api })
    }
}

#[async_trait]
impl ApiClient for ProxyApiClient {
    #[instrument(name = "proxy_get_item", skip(self))]
    async fn get_item(&self, id: i64) -> Result<String, ClientError> {
        self.api.get_item(id).await
    }
}
