//! Driver comparing the proxy-style and manual items clients.
//!
//! [`run`] builds one transport per client from the same [`ClientConfig`],
//! fetches item [`ITEM_ID`] through each client in a fixed order and writes a
//! label line followed by the body. The first failure ends the run; later
//! clients are not called.

use std::io::Write;

use anyhow::Context;
use items_core::{ApiClient, ClientConfig, ManualApiClient, ProxyApiClient, TransportHandle};
use tracing::info;

pub const ITEM_ID: i64 = 1;

pub const PROXY_LABEL: &str = "Proxy-style client result:";
pub const MANUAL_LABEL: &str = "Manual adapter result:";

/// Compact logs on stderr, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

pub async fn run<W: Write>(config: &ClientConfig, out: &mut W) -> anyhow::Result<()> {
    // Each client gets its own transport.
    let proxy_transport = TransportHandle::new(config)?;
    info!(base_address = %proxy_transport.base_address(), "starting comparison run");

    let proxy = ProxyApiClient::new(proxy_transport).context("building proxy-style client")?;
    let manual = ManualApiClient::new(TransportHandle::new(config)?);

    let clients: [(&str, Box<dyn ApiClient>); 2] = [
        (PROXY_LABEL, Box::new(proxy) as Box<dyn ApiClient>),
        (MANUAL_LABEL, Box::new(manual) as Box<dyn ApiClient>),
    ];

    for (label, client) in &clients {
        writeln!(out, "{label}")?;
        let body = client
            .get_item(ITEM_ID)
            .await
            .with_context(|| format!("fetching item {ITEM_ID} ({label})"))?;
        writeln!(out, "{body}")?;
    }

    info!("comparison run finished");
    Ok(())
}
