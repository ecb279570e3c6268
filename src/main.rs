use filament::config::ServerConfig;
use filament::server::listener::Listener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let config = ServerConfig::from_args(std::env::args().skip(1))?;
    info!("content root is {}", config.content_root().display());

    let listener = Listener::bind(config).await?;
    info!("listening on {}", listener.local_addr()?);

    let handle = listener.start();

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    handle.stop();
    handle.stopped().await;

    Ok(())
}
