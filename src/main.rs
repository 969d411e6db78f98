use axum::{Extension, Router, routing::get};
use mediakv::store::handlers::{handle_get, handle_set};
use mediakv::store::memory::KeyValueStore;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8080".parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Storage engine:
    let store = Arc::new(KeyValueStore::new());

    // 2. HTTP router:
    let app = Router::new()
        .route("/:key", get(handle_get).post(handle_set))
        .layer(Extension(store.clone()));

    // 3. Spawn stats reporter:
    let stats_store = store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(30));

        loop {
            interval.tick().await;
            tracing::info!("Store stats: {} records", stats_store.len());
        }
    });

    // 4. Start HTTP server:
    tracing::info!("Key-value store listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
