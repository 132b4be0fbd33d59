//! Employee API Server
//!
//! CRUD over employee records backed by PostgreSQL.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresEmployeeRepository;
use app::EmployeeService;
use config::Config;
use domain::ports::EmployeeRepository;

/// Application state shared across all handlers
pub struct AppState<ER: EmployeeRepository> {
    pub employee_service: Arc<EmployeeService<ER>>,
}

impl<ER: EmployeeRepository> Clone for AppState<ER> {
    fn clone(&self) -> Self {
        Self {
            employee_service: self.employee_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router for the given state
pub fn build_router<ER: EmployeeRepository + 'static>(state: AppState<ER>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Employees
        .route(
            "/api/employees",
            get(handlers::list_employees::<ER>).post(handlers::create_employee::<ER>),
        )
        .route(
            "/api/employees/search",
            get(handlers::search_employees::<ER>),
        )
        .route(
            "/api/employees/:id",
            get(handlers::get_employee::<ER>)
                .put(handlers::update_employee::<ER>)
                .delete(handlers::delete_employee::<ER>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,employee_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Employee API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.auto_create_schema {
        adapters::ensure_schema(&db)
            .await
            .context("Failed to create employees table")?;
    }

    // Create adapters
    let employee_repo = Arc::new(PostgresEmployeeRepository::new(db));

    // Create application services
    let employee_service = Arc::new(EmployeeService::new(employee_repo));

    let app = build_router(AppState { employee_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
