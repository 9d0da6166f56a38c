//! HTTP surface of the transaction store.
//!
//! Handlers translate requests into store calls and wrap every result in
//! [`ApiResponse`](envelope::ApiResponse). Store errors are mapped to status
//! codes here and nowhere else.

mod envelope;
mod errors;
mod transaction_apis;

use std::sync::Arc;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::storage::TransactionStore;

use errors::handle_panic;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TransactionStore>
}

impl AppState {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/transactions", transaction_apis::router())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
