pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;
pub mod views;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub store: store::TicketStore,
    pub bookings: services::BookingService,
    pub config: config::Config,
}

impl AppState {
    pub async fn new(config: config::Config) -> Arc<Self> {
        let store = store::TicketStore::seeded();
        let storage = storage::TicketStorage::new(&config.storage.data_dir);

        if config.features.hydrate_from_disk {
            store.hydrate_from(&storage).await;
        } else {
            info!("Using seed data, disk hydration disabled");
        }

        let bookings = services::BookingService::new(store.clone(), storage);
        Arc::new(Self { store, bookings, config })
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.app.static_dir);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .nest_service("/static", static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
