use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/reports/:brand", get(handlers::get_report))
        .route("/api/topics", get(handlers::list_topics))
        .route(
            "/api/config",
            get(handlers::get_config).put(handlers::put_config),
        )
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Bind and serve the API on the given port.
pub async fn serve(state: AppState, port: u16) -> bi_core::Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Listening on port {}", port);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use bi_core::{BrandReport, Error, Result};
}
