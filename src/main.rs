//! Process entry point: parse flags, init tracing, build the host, serve.

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use multiservice::{build_application, AppConfig};

#[derive(Parser)]
#[command(name = "multiservice")]
#[command(about = "Multi-service web application host", long_about = None)]
struct Cli {
    /// Address to bind the HTTP listener to.
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Verbose logging for development.
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    config.debug = cli.debug;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("multiservice v{} starting", env!("CARGO_PKG_VERSION"));

    if config.uses_insecure_secret() {
        tracing::warn!(
            "SECRET_KEY not set; using the development default (insecure, do not deploy)"
        );
    }

    // Fail fast: any definition or mount error aborts before binding.
    let application = build_application(config)?;

    let listener = TcpListener::bind(&cli.bind).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    application
        .serve_with_shutdown(listener, shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
