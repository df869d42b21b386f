mod config;
mod handlers;
mod routes;

use anyhow::Context;
use axum::{routing::get, Router};
use config::Config;
use tower_http::trace::TraceLayer;

fn app() -> Router {
    Router::new()
        .route(routes::READ, get(handlers::read_handler))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("message-service starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    axum::serve(listener, app())
        .await
        .context("server error")?;

    Ok(())
}
