use anyhow::Result;
use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use world_cup::Dataset;

mod config;
mod dashboard;
mod routes;

use config::GatewayConfig;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            started_at: Utc::now(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "cup_gateway=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dataset = Dataset::load();
    tracing::info!("   Loaded {} finals", dataset.finals().len());
    tracing::info!("   Winners: {}", dataset.win_counts().len());

    for country in dataset.choropleth().unmapped {
        tracing::warn!("   No ISO-3 code for {} - left off the map", country);
    }

    let config = GatewayConfig::from_env();
    let addr = config.bind_addr();
    let app = build_app(AppState::new(dataset));

    tracing::info!("🏆 Cup gateway starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", routes::api_routes())
        .merge(dashboard::dashboard_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "cup-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "records": state.dataset.finals().len(),
        "started_at": state.started_at.to_rfc3339(),
    }))
}
