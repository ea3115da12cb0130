//! Both adapters against the live mock server.
//!
//! Starts the mock server on a random port and checks that the proxy-style
//! and manual clients agree: same body on success, a call failure on a
//! non-success status or an unreachable server.

use std::net::SocketAddr;

use items_core::route::Json;
use items_core::{
    declare_api, ApiClient, ClientConfig, ClientError, ErrorKind, ManualApiClient, ProxyApiClient,
    TransportHandle,
};
use mock_server::ItemEntry;

fn config(addr: SocketAddr) -> ClientConfig {
    ClientConfig::new(&format!("http://{addr}"))
}

fn clients(config: &ClientConfig) -> Vec<(&'static str, Box<dyn ApiClient>)> {
    let proxy = ProxyApiClient::new(TransportHandle::new(config).unwrap()).unwrap();
    let manual = ManualApiClient::new(TransportHandle::new(config).unwrap());
    vec![
        ("proxy", Box::new(proxy) as Box<dyn ApiClient>),
        ("manual", Box::new(manual) as Box<dyn ApiClient>),
    ]
}

/// An address nothing listens on.
fn unreachable_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

#[tokio::test]
async fn both_adapters_return_the_same_body() {
    let addr = mock_server::spawn(mock_server::app()).await.unwrap();

    for (label, client) in clients(&config(addr)) {
        let body = client.get_item(1).await.unwrap();
        assert_eq!(body, "Item-1", "{label}");
    }
}

#[tokio::test]
async fn body_is_returned_verbatim() {
    let body = "  multi\nline body with \"quotes\"  ";
    let addr = mock_server::spawn(mock_server::app_with([(5, body.to_string())]))
        .await
        .unwrap();

    for (label, client) in clients(&config(addr)) {
        assert_eq!(client.get_item(5).await.unwrap(), body, "{label}");
    }
}

#[tokio::test]
async fn not_found_is_a_call_failure_for_both() {
    let addr = mock_server::spawn(mock_server::app()).await.unwrap();

    for (label, client) in clients(&config(addr)) {
        let err = client.get_item(42).await.unwrap_err();
        assert!(
            matches!(err, ClientError::HttpStatus { status: 404, .. }),
            "{label}: {err:?}"
        );
        assert_eq!(err.kind(), ErrorKind::Call, "{label}");
    }
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure_for_both() {
    let addr = unreachable_addr();

    for (label, client) in clients(&config(addr)) {
        let err = client.get_item(1).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport { .. }), "{label}: {err:?}");
        assert_eq!(err.kind(), ErrorKind::Call, "{label}");
    }
}

#[tokio::test]
async fn repeated_calls_are_idempotent() {
    let addr = mock_server::spawn(mock_server::app()).await.unwrap();

    for (label, client) in clients(&config(addr)) {
        let first = client.get_item(2).await.unwrap();
        let second = client.get_item(2).await.unwrap();
        assert_eq!(first, second, "{label}");
        assert_eq!(first, "Item-2", "{label}");
    }
}

#[tokio::test]
async fn base_address_path_prefix_is_preserved() {
    let router = mock_server::Router::new().nest("/api", mock_server::app());
    let addr = mock_server::spawn(router).await.unwrap();

    let config = ClientConfig::new(&format!("http://{addr}/api/"));
    for (label, client) in clients(&config) {
        assert_eq!(client.get_item(3).await.unwrap(), "Item-3", "{label}");
    }
}

declare_api! {
    /// A wider client over the same server, declared the same way as the
    /// proxy adapter's.
    struct CatalogApi {
        GET "/items" => fn list_items() -> Json<Vec<ItemEntry>>;
        GET "/items/{id}" => fn get_item(id: i64) -> String;
        PUT "/items/{id}" => fn touch_item(id: i64) -> ();
    }
}

#[tokio::test]
async fn declared_api_supports_several_routes() {
    let addr = mock_server::spawn(mock_server::app()).await.unwrap();
    let api = CatalogApi::new(TransportHandle::new(&config(addr)).unwrap()).unwrap();

    let Json(items) = api.list_items().await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(
        items[0],
        ItemEntry {
            id: 1,
            name: "Item-1".to_string()
        }
    );

    // PUT without a body stores an empty item.
    api.touch_item(10).await.unwrap();
    assert_eq!(api.get_item(10).await.unwrap(), "");

    let Json(items) = api.list_items().await.unwrap();
    assert_eq!(items.len(), 4);
}

#[tokio::test]
async fn json_decode_failure_is_a_call_failure() {
    declare_api! {
        struct BadJsonApi {
            GET "/items/{id}" => fn get_item(id: i64) -> Json<ItemEntry>;
        }
    }

    let addr = mock_server::spawn(mock_server::app()).await.unwrap();
    let api = BadJsonApi::new(TransportHandle::new(&config(addr)).unwrap()).unwrap();

    let err = api.get_item(1).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::Call);
}

#[tokio::test]
async fn default_headers_reach_the_server() {
    let addr = mock_server::spawn(mock_server::echo_user_agent_app()).await.unwrap();
    let config = config(addr)
        .with_header("user-agent", "items-core-tests")
        .with_header("accept", "text/plain");

    for (label, client) in clients(&config) {
        assert_eq!(client.get_item(1).await.unwrap(), "items-core-tests", "{label}");
    }
}

#[tokio::test]
async fn user_agent_from_environment_reaches_the_server() {
    let addr = mock_server::spawn(mock_server::echo_user_agent_app()).await.unwrap();
    let base = format!("http://{addr}");
    let config = ClientConfig::from_lookup(|name| match name {
        items_core::config::BASE_ADDRESS_VAR => Some(base.clone()),
        items_core::config::USER_AGENT_VAR => Some("items-demo/env".to_string()),
        _ => None,
    });

    for (label, client) in clients(&config) {
        assert_eq!(client.get_item(7).await.unwrap(), "items-demo/env", "{label}");
    }
}
