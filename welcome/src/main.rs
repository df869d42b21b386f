mod api_doc;
mod config;
mod routes;

use anyhow::Context;
use api_doc::ApiDoc;
use axum::Router;
use config::Config;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn app() -> Router {
    // No application routes yet: the router carries only the generated
    // documentation, built from whatever ApiDoc registers.
    let swagger_ui = SwaggerUi::new(routes::SWAGGER_UI)
        .url(routes::OPENAPI_JSON, ApiDoc::openapi());

    Router::new()
        .merge(swagger_ui)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("welcome-service starting");

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
