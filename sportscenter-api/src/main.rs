use std::net::SocketAddr;
use std::sync::Arc;

use sportscenter_api::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "sportscenter_api=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = sportscenter_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting Sports Center API on port {}", config.server.port);

    let store = Arc::new(sportscenter_store::MemoryStore::new());
    let state = AppState::new(store);
    let app = app(state, &config.cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
