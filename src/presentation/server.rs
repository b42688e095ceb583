use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// The dashboard page, rendered once before the server starts.
#[derive(Clone)]
struct PageState {
    page: Arc<str>
}

pub fn router(page: String) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .with_state(PageState { page: Arc::from(page) })
}

/// Serves the pre-rendered dashboard until Ctrl-C.
pub async fn serve(address: &str, page: String) -> std::io::Result<()> {
    let listener = TcpListener::bind(address).await?;

    info!("Dashboard running on http://{}", listener.local_addr()?);

    axum::serve(listener, router(page))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn index(State(state): State<PageState>) -> Html<String> {
    Html(state.page.to_string())
}

async fn health() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutting down dashboard"),
        Err(error) => {
            error!("Could not listen for shutdown signal: {error}");
            std::future::pending::<()>().await;
        }
    }
}
