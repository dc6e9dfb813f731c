//! HTTP transport for the item store.
//!
//! ## Routes
//!
//! - `GET /health`
//! - `GET /items` with `q`, `status`, `category`, `sort`, `order`, `page`, `limit`
//! - `POST /items`
//! - `GET | PATCH | DELETE /items/{id}`
//!
//! Every failure is answered with a JSON `{"error": "..."}` body.

mod error;
mod extract;
mod routes;

pub use error::ErrorBody;

use axum::Router;
use axum::http::Method;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerSettings;
use crate::error::Result;
use crate::storage::SharedStore;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

/// Builds the complete application router around `store`.
pub fn router(store: SharedStore) -> Router {
    routes::router()
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}

/// Reflects the caller's origin and requested headers.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}

/// Serves the API until Ctrl-C.
pub async fn run_server(settings: &ServerSettings, store: SharedStore) -> Result<()> {
    let addr = settings.addr();
    let items = store.lock().len();
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(%local, items, "Item API listening");
    tracing::info!("Try: http://localhost:{}/items", local.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
