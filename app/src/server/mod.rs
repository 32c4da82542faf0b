pub mod api;
pub mod router;
pub mod websocket;

use anyhow::Result;
use tokio::net::TcpListener;

use crate::app::SharedState;

/// Bind the configured address and run the push hub until shutdown.
pub async fn start_server(state: SharedState) -> Result<()> {
    let addr = format!("{}:{}", state.config().server_host, state.server_port());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Push hub listening on http://{}", addr);
    serve(listener, state).await
}

/// Serve on an already-bound listener.
pub async fn serve(listener: TcpListener, state: SharedState) -> Result<()> {
    let shutdown_token = state.shutdown_token().clone();
    let app = router::create_router(state);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move { shutdown_token.cancelled().await })
        .await?;

    Ok(())
}
