//! The capability interface shared by every items client.

use async_trait::async_trait;

use crate::error::ClientError;

/// Fetch an item's body as text.
///
/// Implementations do not validate `id`; the server decides which ids exist.
/// Any failure is returned as-is, with no retry or fallback.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get_item(&self, id: i64) -> Result<String, ClientError>;
}
