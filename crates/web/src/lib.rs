//! Example application under test
//!
//! A single page that browser sessions on the grid open during smoke tests.

use std::net::SocketAddr;

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Markup served at `/`
pub const GREETING_HTML: &str = "<p>Hello, Zalenium!</p>";

/// Address used when `TESTBOARD_APP_ADDR` is unset
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<&'static str> {
    Html(GREETING_HTML)
}

pub async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on: {}", listener.local_addr()?.port());
    axum::serve(listener, router()).await?;
    Ok(())
}
