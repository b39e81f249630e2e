//! Accounting Module - Standalone Service Entry Point
//!
//! This binary hosts the accounting plugin the way the ERP platform
//! does: it builds the shared database pool, initializes the plugin,
//! and mounts the plugin's router under the module path prefix. The
//! endpoints cover the chart of accounts, transactions, journal
//! entries, budgets, and financial reports.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Plugin contract**: `ModulePlugin` (initialize / route lookup / cleanup)
//! - **Format**: JSON requests/responses in the platform envelope
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Initialize the accounting plugin with the pool
//! 5. Mount the plugin router and start the server

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod plugin;
mod response;
mod routes;
mod services;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::plugin::{AccountingPlugin, ModulePlugin};

/// Path prefix the host platform mounts this module under.
const MODULE_PREFIX: &str = "/api/modules/accounting";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging. Reads RUST_LOG (defaults to "info").
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url, config.max_connections).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Initialize the plugin with the shared pool, as the host would
    let mut plugin = AccountingPlugin::new();
    plugin.initialize(pool)?;
    tracing::info!(
        module = plugin.module_code(),
        version = plugin.module_version(),
        "module loaded"
    );

    // Mount the module router under its platform prefix
    let app = Router::new()
        .nest(MODULE_PREFIX, plugin.router()?)
        // Request tracing for observability
        .layer(TraceLayer::new_for_http());

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Serve HTTP requests until shutdown
    axum::serve(listener, app).await?;

    Ok(())
}
