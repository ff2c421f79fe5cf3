use perchance_mcp_server::config::ServerConfig;
use perchance_mcp_server::server::McpServer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("perchance-mcp-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        seeded = config.rng_seed.is_some(),
        "starting perchance-mcp-server"
    );

    let mut server = McpServer::new(config);
    if let Err(e) = server.run().await {
        eprintln!("perchance-mcp-server: fatal error: {e}");
        std::process::exit(1);
    }
}
