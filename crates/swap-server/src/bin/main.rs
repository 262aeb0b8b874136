use tracing_subscriber::EnvFilter;

use swap_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let (app, state) = swap_server::build_app(&config).await;

    for (language, sizes) in state.dataset.stats() {
        for (size, count) in sizes {
            tracing::debug!(%language, %size, count, "dataset bucket ready");
        }
    }

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(
        %addr,
        max_requests = config.rate_limit.max_requests,
        window_ms = config.rate_limit.window.as_millis() as u64,
        "listening"
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
