//! Beer Stock API Library
//!
//! Inventory of beer stock records served over a JSON REST API.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod tracing;

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use handlers::BeerHandlerState;
use repositories::BeerRepository;
use services::{BeerService, BeerStockService};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub beer_service: Arc<dyn BeerStockService>,
}

impl AppState {
    /// Wires the sea-orm backed store and service over `db`.
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let store = Arc::new(BeerRepository::new(db.clone()));
        let beer_service: Arc<dyn BeerStockService> = Arc::new(BeerService::new(store));
        Self {
            db,
            config,
            beer_service,
        }
    }
}

impl BeerHandlerState for AppState {
    fn beer_service(&self) -> Arc<dyn BeerStockService> {
        self.beer_service.clone()
    }
}

/// Versioned API routes, mounted under `/api/v1`
pub fn api_v1_routes() -> Router<AppState> {
    Router::new().nest("/beers", handlers::beer_routes::<AppState>())
}

/// Full application router: API, health, docs, tracing and request ids.
///
/// CORS and timeouts are left to the binary.
pub fn app(state: AppState) -> Router {
    let health = health::health_routes(state.db.clone());

    Router::new()
        .route("/", get(|| async { "beer-stock-api up" }))
        .nest("/api/v1", api_v1_routes())
        .with_state(state)
        .nest("/health", health)
        .merge(openapi::swagger_ui())
        // HTTP tracing layer for consistent request/response telemetry
        .layer(tracing::configure_http_tracing())
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
}
