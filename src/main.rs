//! carnet server binary
//!
//! Serves the contacts API over an in-memory store. A development
//! credential is issued at startup and logged, since user provisioning is
//! outside the API surface.

use std::sync::Arc;

use carnet::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("carnet=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let auth = InMemoryAuthProvider::new();
    let (token, actor) = auth.issue()?;
    tracing::info!(%token, actor_id = %actor.id, "issued development credential");

    let state = AppState {
        contacts: Arc::new(InMemoryContactStore::new()),
        auth: Arc::new(auth),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "carnet listening");
    axum::serve(listener, app).await?;

    Ok(())
}
