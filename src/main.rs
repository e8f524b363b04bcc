use student_registry::config::ServerConfig;
use student_registry::students::handlers::router;
use student_registry::students::service::StudentService;
use student_registry::students::store::StudentStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Storage layer:
    let store = Arc::new(StudentStore::new());

    // 2. Service:
    let service = StudentService::new(store);

    // 3. HTTP Router:
    let app = router(service);

    // 4. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
