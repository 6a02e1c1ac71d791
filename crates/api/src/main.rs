use std::sync::Arc;

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    canemart_observability::init();

    let prediction_url = std::env::var("PREDICTION_URL").unwrap_or_else(|_| {
        tracing::warn!("PREDICTION_URL not set; using local dev default");
        "http://localhost:7860/predict".to_string()
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let services = Arc::new(canemart_api::app::services::build_services(prediction_url));
    let app = canemart_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {bind_addr}");

    axum::serve(listener, app)
        .await
        .context("server exited with an error")?;
    Ok(())
}
