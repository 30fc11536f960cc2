//! API route definitions for claim preparation.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::AppState;

/// Create API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Lock derivation and claim proof generation
        .route("/api/lock/derive", post(handlers::derive_lock))
        .route("/api/prove/claim", post(handlers::prove_claim))
        // Claimer index endpoints
        .route("/api/claimers/root", post(handlers::claimer_root))
        .route("/api/claimers/proof", post(handlers::claimer_proof))
}
