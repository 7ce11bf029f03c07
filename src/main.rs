use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info, warn};

use materials_dashboard as dashboard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = dashboard::config::load_config().context("failed to load configuration")?;
    dashboard::config::init_tracing(cfg.log_level(), cfg.log_json);
    dashboard::handlers::health::init_start_time();

    let app_state =
        dashboard::AppState::from_config(&cfg).context("failed to seed dashboard collections")?;
    info!(
        environment = %cfg.environment,
        low_stock_threshold = cfg.low_stock_threshold,
        currency = %cfg.currency,
        "dashboard collections loaded"
    );

    if cfg.should_allow_permissive_cors() && !cfg.has_cors_allowed_origins() {
        info!(
            "Using permissive CORS because explicit origins were not configured ({})",
            if cfg.is_development() {
                "development environment"
            } else {
                "explicit override enabled"
            }
        );
    }

    let app = dashboard::api::app_router(app_state);

    let host: std::net::IpAddr = cfg.host.parse().unwrap_or_else(|_| {
        warn!(host = %cfg.host, "invalid host; binding to 0.0.0.0");
        std::net::IpAddr::from([0, 0, 0, 0])
    });
    let addr = SocketAddr::new(host, cfg.port);
    info!("materials-dashboard listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
