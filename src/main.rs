use std::env;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use rulesage_backend::core::logging;
use rulesage_backend::server;
use rulesage_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let state = AppState::initialize()?;
    logging::init(&state.paths);

    let port = env::var("PORT")
        .ok()
        .and_then(|val| val.parse::<u16>().ok())
        .unwrap_or(0);
    let bind_addr = format!("127.0.0.1:{}", port);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    let addr = listener.local_addr()?;

    println!("RULESAGE_PORT={}", addr.port());
    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "Corpus ready: {} chunks, {} sections",
        state.corpus.chunks().len(),
        state.corpus.sections().len()
    );

    let app: Router = server::router::router(state.clone());

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
