use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auto_keepalive::config::{load_config, AppConfig, ScopeTree};
use auto_keepalive::HttpServer;

/// Demo host server with the keep-alive auto-close policy wired in.
#[derive(Parser)]
#[command(name = "auto-keepalive", version)]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address from the config.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auto_keepalive=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    let tree = ScopeTree::resolve(&config);
    tracing::info!(
        bind_address = %config.listener.bind_address,
        global_autoclose = tree.global.autoclose,
        server_scopes = tree.servers.len(),
        "Configuration loaded"
    );
    for server in &tree.servers {
        tracing::debug!(
            host = %server.host,
            autoclose = server.scope.autoclose,
            locations = server.locations.len(),
            "Resolved server scope"
        );
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(tree);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
