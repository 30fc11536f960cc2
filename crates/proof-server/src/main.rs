//! HTTP API server for red packet claim preparation.

use std::net::SocketAddr;
use std::sync::Arc;

use ark_bn254::Bn254;
use ark_groth16::VerifyingKey;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod handlers;
mod routes;

use redpacket_prover::prove::Groth16Prover;
use redpacket_prover::setup::load_or_setup;

/// Application state shared across handlers.
///
/// Keys are loaded once at startup and never mutated; the prover and
/// verifying key are safe for concurrent use.
pub struct AppState {
    pub prover: Groth16Prover,
    pub verifying_key: VerifyingKey<Bn254>,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("starting red packet proof server");

    // Load or generate circuit keys
    let keys_dir = std::path::Path::new("keys");
    if keys_dir.exists() {
        tracing::info!("loading existing circuit keys from {:?}", keys_dir);
    } else {
        tracing::info!("running trusted setup (this may take a while)");
    }
    let keys = load_or_setup(keys_dir).expect("Failed to load or generate circuit keys");

    let state = Arc::new(AppState {
        verifying_key: keys.verifying_key.clone(),
        prover: Groth16Prover::new(keys.proving_key),
    });

    // Build router
    let app = Router::new()
        .merge(routes::api_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3001));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
