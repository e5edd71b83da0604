use anyhow::Context;
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use kinofetch::{Ctx, config::AppConfig, routes};

fn init_logging(config: &AppConfig) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(&config.logging.directory, "kinofetch.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    let _log_guard = init_logging(&config);

    let bind_addr = config.bind_addr();
    let ctx = Ctx::new(config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", routes::api::mount())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx);

    info!("Starting kinofetch on {bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("Failed to bind server address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
