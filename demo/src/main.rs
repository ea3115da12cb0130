use items_core::ClientConfig;
use items_demo::{run, setup_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = ClientConfig::from_env();
    let mut stdout = std::io::stdout().lock();
    run(&config, &mut stdout).await
}
