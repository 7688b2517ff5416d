//! Development server for working on the vehicle listing UI
//!
//! Serves the listing backend and the media host from one local process, so
//! the form can be exercised end to end without either real service.
//!
//! Usage: cargo run -p dev-server

use anyhow::{Context, Result};
use std::env;
use test_helpers::{StandIn, TEST_CLOUD_NAME, TEST_UPLOAD_PRESET, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber)?;

    let ip = env::var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".into());
    let cloud_name =
        env::var("MEDIA_CLOUD_NAME").unwrap_or_else(|_| TEST_CLOUD_NAME.into());
    let upload_preset = env::var("MEDIA_UPLOAD_PRESET")
        .unwrap_or_else(|_| TEST_UPLOAD_PRESET.into());

    let listener = tokio::net::TcpListener::bind(format!("{ip}:{port}"))
        .await
        .with_context(|| format!("binding {ip}:{port}"))?;
    let address = format!("http://{}", listener.local_addr()?);

    let stand_in = StandIn::new(upload_preset.clone());
    let server = tokio::spawn(axum::serve(listener, stand_in.router()).into_future());

    info!("🚀 Vehicle listing dev server ready on {address}");
    info!(
        "   UI:  cd ui && BACKEND_URL={address} MEDIA_BASE_URL={address} \
         MEDIA_CLOUD_NAME={cloud_name} MEDIA_UPLOAD_PRESET={upload_preset} trunk serve"
    );
    info!("👋 Press Ctrl+C to shutdown");

    tokio::select! {
        result = server => {
            result?.context("dev server stopped")?;
        }
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("🛑 Shutting down development server");
        }
    }

    let vehicles = stand_in.vehicles();
    info!("Received {} vehicle record(s) this session", vehicles.len());
    Ok(())
}
