mod error;
mod extractors;
mod people;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, Method, Uri},
    routing::get,
    Json, Router,
};
use rollcall_common::error::RollcallError;
use rollcall_common::types::ServiceInfo;
use rollcall_config::{init_tracing, AppConfig};
use rollcall_db::person::pg_repository::PgPersonRepository;
use rollcall_db::person::repositories::PersonRepository;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

const SERVICE_NAME: &str = "rollcall-api";

#[derive(Clone)]
pub struct AppState {
    pub person_repo: Arc<dyn PersonRepository>,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError(RollcallError::NotFound(format!(
        "route not found: {}",
        uri.path()
    )))
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .merge(people::router())
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);
    tracing::info!(service = SERVICE_NAME, "starting");

    let pool = rollcall_db::create_pool(
        rollcall_db::connect_options(&config.database),
        config.database.max_connections,
    )
    .await
    .expect("failed to create database pool");

    let state = AppState {
        person_repo: Arc::new(PgPersonRepository::new(pool)),
    };

    let app = build_router(state);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("shutdown complete");
}
