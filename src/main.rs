use anyhow::Context;
use clap::Parser;
use countrysrv::{
    api::{self, AppState},
    cli::Args,
    config::Config,
    services::{country::CountryService, device::FixedLocation},
    utils::http::ReqwestHttpClient,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.tracing_level())
        .init();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(port) = args.port {
        config.server_port = port;
    }

    info!("Country data service: {}", config.country_data_url);
    info!("Geocoding service: {}", config.geocode_url);
    if let Some(location) = config.default_location {
        info!(
            "Default location: ({}, {})",
            location.latitude, location.longitude
        );
    }

    let country_service = Arc::new(CountryService::from_config(
        ReqwestHttpClient::new(),
        &config,
    ));

    let app_state = AppState {
        country_service,
        location: FixedLocation::new(config.default_location),
    };

    let app = api::router(app_state);

    let listener = TcpListener::bind(&format!("0.0.0.0:{}", config.server_port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.server_port))?;

    info!("Server listening on http://0.0.0.0:{}", config.server_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Signal received, starting graceful shutdown");
}
