//! HR Console
//!
//! Hosts the view-state machine of the HR and campus-recruitment console:
//! who is logged in, which screen is mounted, and which callbacks it gets.

mod api;
mod auth;
mod config;
mod console;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::StaticAdminCredentials;
use config::Config;
use console::Console;
use store::{DocumentClient, HttpSessionStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub console: Arc<Mutex<Console>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(console: Console, config: Config) -> Self {
        Self {
            console: Arc::new(Mutex::new(console)),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HR Console");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (HR_CONSOLE_API_PSK). Authentication is disabled!");
    }

    let documents = DocumentClient::new(config.store_url.clone());
    tracing::info!("Document store: {}", documents.base_url());

    let console = Console::new(
        Arc::new(StaticAdminCredentials::new(
            config.admin_email.clone(),
            config.admin_password.clone(),
        )),
        Arc::new(HttpSessionStore::new(documents)),
    );

    let state = AppState::new(console, config.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    let api_routes = Router::new()
        .route("/console", get(api::get_view))
        .route("/console/actions", post(api::dispatch_action))
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
