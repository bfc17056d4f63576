//! Pricing service binary.
//!
//! Environment:
//! - `BIND_ADDR`: listen address (default `0.0.0.0:8090`)
//! - `RUST_LOG`: tracing filter (default `info,tourwise_pricing=debug`)

use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tourwise_pricing=debug")),
        )
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8090".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("Pricing service listening on {}", bind_addr);

    axum::serve(listener, tourwise_pricing::app())
        .await
        .context("server error")?;

    Ok(())
}
