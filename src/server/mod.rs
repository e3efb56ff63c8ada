use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::SqliteStore;

pub mod routes;

/// Server state. The store handle is locked for the span of exactly one
/// request; writes stay atomic per statement, last write wins across
/// concurrent edits.
pub struct AppState {
    pub store: Mutex<SqliteStore>,
}

pub async fn start_server(port: u16, database_path: PathBuf) -> anyhow::Result<()> {
    let store = SqliteStore::open(&database_path)?;
    let state = Arc::new(AppState {
        store: Mutex::new(store),
    });

    let app = Router::new()
        .route("/trees", get(routes::list_trees).post(routes::create_tree))
        .route(
            "/trees/{id}",
            get(routes::get_tree)
                .put(routes::update_tree)
                .delete(routes::delete_tree),
        )
        .route("/stats", get(routes::get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting tree registry API on {}", addr);
    println!("🌍 Tree registry API running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
