use std::{collections::BTreeMap, net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub use axum::Router;

/// One entry of the `GET /items` listing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemEntry {
    pub id: i64,
    pub name: String,
}

pub type Catalog = Arc<RwLock<BTreeMap<i64, String>>>;

/// Items 1 to 3, each named `Item-{id}`.
pub fn default_items() -> Vec<(i64, String)> {
    (1..=3).map(|id| (id, format!("Item-{id}"))).collect()
}

pub fn app() -> Router {
    app_with(default_items())
}

pub fn app_with(items: impl IntoIterator<Item = (i64, String)>) -> Router {
    let catalog: Catalog = Arc::new(RwLock::new(items.into_iter().collect()));
    Router::new()
        .route("/items", get(list_items))
        .route("/items/{id}", get(get_item).put(put_item))
        .with_state(catalog)
}

/// Answers `GET /items/{id}` with the request's `user-agent` header, or 400
/// when it is missing.
pub fn echo_user_agent_app() -> Router {
    Router::new().route("/items/{id}", get(echo_user_agent))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `router` on a random local port in the background and return its
/// address.
pub async fn spawn(router: Router) -> Result<SocketAddr, std::io::Error> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(error) = axum::serve(listener, router).await {
            tracing::error!(%error, "mock server stopped");
        }
    });
    Ok(addr)
}

async fn list_items(State(catalog): State<Catalog>) -> Json<Vec<ItemEntry>> {
    let items = catalog.read().await;
    Json(
        items
            .iter()
            .map(|(id, name)| ItemEntry {
                id: *id,
                name: name.clone(),
            })
            .collect(),
    )
}

async fn get_item(State(catalog): State<Catalog>, Path(id): Path<i64>) -> Result<String, StatusCode> {
    let items = catalog.read().await;
    tracing::debug!(id, found = items.contains_key(&id), "get item");
    items.get(&id).cloned().ok_or(StatusCode::NOT_FOUND)
}

async fn echo_user_agent(Path(_id): Path<i64>, headers: HeaderMap) -> Result<String, StatusCode> {
    headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or(StatusCode::BAD_REQUEST)
}

async fn put_item(
    State(catalog): State<Catalog>,
    Path(id): Path<i64>,
    body: String,
) -> (StatusCode, String) {
    let mut items = catalog.write().await;
    let status = match items.insert(id, body.clone()) {
        Some(_) => StatusCode::OK,
        None => StatusCode::CREATED,
    };
    tracing::debug!(id, %status, "put item");
    (status, body)
}
