//! HTTP request handlers for claim preparation.

use std::sync::Arc;

use alloy_primitives::{Address, B256};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use redpacket_prover::{
    commitment,
    index::{ClaimerIndex, IndexError},
    prove::{self, ClaimProof, ProveError},
};

use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn bad_request(error: String) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}

/// Parse a claimer list into canonical address form
fn parse_addresses(addresses: &[String]) -> Result<Vec<Address>, String> {
    addresses
        .iter()
        .map(|s| {
            s.parse::<Address>()
                .map_err(|e| format!("Invalid address {s:?}: {e}"))
        })
        .collect()
}

// ============ Lock derivation ============

#[derive(Deserialize)]
pub struct DeriveLockRequest {
    pub password: String,
}

#[derive(Serialize)]
pub struct DeriveLockResponse {
    pub lock: String,
}

pub async fn derive_lock(Json(req): Json<DeriveLockRequest>) -> impl IntoResponse {
    match commitment::derive_lock(&req.password) {
        Ok(lock) => (
            StatusCode::OK,
            Json(DeriveLockResponse {
                lock: lock.to_string(),
            }),
        )
            .into_response(),
        Err(e) => bad_request(e.to_string()),
    }
}

// ============ Claim proof ============

#[derive(Deserialize)]
pub struct ProveClaimRequest {
    pub password: String,
}

/// `proof` is null when the freshly generated proof failed the local
/// self-check and must not be submitted.
#[derive(Serialize)]
pub struct ProveClaimResponse {
    pub proof: Option<ClaimProof>,
}

pub async fn prove_claim(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProveClaimRequest>,
) -> impl IntoResponse {
    // Proof generation runs inline: it is the handler's whole job and the
    // worker pool is sized for it.
    match prove::prove_claim(&state.prover, &state.verifying_key, &req.password) {
        Ok(result) => (StatusCode::OK, Json(ProveClaimResponse { proof: result })).into_response(),
        Err(ProveError::Commitment(e)) => bad_request(e.to_string()),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

// ============ Claimer index ============

#[derive(Deserialize)]
pub struct ClaimerRootRequest {
    pub addresses: Vec<String>,
}

#[derive(Serialize)]
pub struct ClaimerRootResponse {
    pub root: B256,
}

pub async fn claimer_root(Json(req): Json<ClaimerRootRequest>) -> impl IntoResponse {
    let claimers = match parse_addresses(&req.addresses) {
        Ok(claimers) => claimers,
        Err(e) => return bad_request(e),
    };

    let index = ClaimerIndex::build(&claimers);
    (
        StatusCode::OK,
        Json(ClaimerRootResponse { root: index.root() }),
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct ClaimerProofRequest {
    pub addresses: Vec<String>,
    pub address: String,
}

#[derive(Serialize)]
pub struct ClaimerProofResponse {
    pub root: B256,
    pub proof: Vec<B256>,
}

pub async fn claimer_proof(Json(req): Json<ClaimerProofRequest>) -> impl IntoResponse {
    let claimers = match parse_addresses(&req.addresses) {
        Ok(claimers) => claimers,
        Err(e) => return bad_request(e),
    };
    let claimer = match req.address.parse::<Address>() {
        Ok(claimer) => claimer,
        Err(e) => return bad_request(format!("Invalid address {:?}: {e}", req.address)),
    };

    let index = ClaimerIndex::build(&claimers);
    match index.proof_for(claimer) {
        Ok(proof) => (
            StatusCode::OK,
            Json(ClaimerProofResponse {
                root: index.root(),
                proof,
            }),
        )
            .into_response(),
        Err(e @ IndexError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
