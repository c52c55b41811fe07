use clap::Parser;
use exchange_service::{
    app,
    config::{Config, LogFormat},
    exchange::Exchange,
    AppState,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(cfg: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    match cfg.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .init(),
        LogFormat::Compact => tracing_subscriber::fmt()
            .compact()
            .with_env_filter(filter)
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "could not listen for shutdown signal");
        return;
    }
    info!("shutdown signal received, exiting");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_logging(&config);

    let exchange = Arc::new(Exchange::new());
    if let Some(mid_price) = config.mid_price {
        exchange.init(mid_price)?;
    }

    let app = app(AppState { exchange });
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    info!("Exchange simulator listening on http://{}", config.addr());
    info!(" Available endpoints:");
    info!("  POST /init         - Reset the book around a mid-price");
    info!("  POST /limit_order  - Rest a limit order");
    info!("  POST /cancel_order - Cancel a resting order");
    info!("  POST /market_order - Execute a market order");
    info!("  GET  /get_data     - Book snapshot");
    info!("  GET  /health       - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
