use std::sync::Arc;

use questlog_api::config::{self, StoreBackendKind};
use questlog_api::routes;
use questlog_api::state::AppState;
use questlog_api::store::{mongo::MongoBackend, Store};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up MONGODB_URI, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Questlog API in {:?} mode", config.environment);

    let store = match config.store.backend {
        StoreBackendKind::Memory => {
            tracing::warn!("Using the in-memory store; documents will not survive a restart");
            Store::in_memory()
        }
        StoreBackendKind::MongoDb => {
            let backend = MongoBackend::connect(&config.store.uri, &config.store.database)
                .await
                .unwrap_or_else(|e| panic!("failed to connect to document store: {}", e));
            Store::new(Arc::new(backend))
        }
    };

    let app = routes::app(AppState::new(store));

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Questlog API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
