//! Route handlers and the JSON schemas they serialize with.
//!
//! Block routes are direct synchronous chain-store reads; peer routes
//! go through the data bridge. All collection responses use the
//! serialization envelope.

use crate::domain::bridge::DataBridge;
use crate::domain::error::ApiError;
use crate::domain::serialize::{serialize, serialize_one, Schema};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use ledgerview_bus::{DataPayload, CONNECTED_PEER_ADDRESSES, KNOWN_PEER_ADDRESSES};
use ledgerview_store::ChainStore;
use ledgerview_types::{Block, PeerAddress};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Number of blocks returned by the block-list route.
pub const DEFAULT_BLOCK_COUNT: usize = 20;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Read side of the chain store.
    pub store: Arc<dyn ChainStore>,
    /// Bridge to the async data bus.
    pub bridge: Arc<DataBridge>,
}

/// Build the route table (unprefixed; the service nests it under the
/// versioned base path).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/blocks/", get(list_blocks))
        .route("/blocks/:blockhash", get(block_by_hash))
        .route("/connected_peers/", get(connected_peers))
        .route("/known_peers/", get(known_peers))
        .with_state(state)
}

async fn list_blocks(State(state): State<AppState>) -> Json<Value> {
    debug!("blocks/");
    let blocks = state.store.get_range(None, DEFAULT_BLOCK_COUNT);
    Json(serialize(&blocks, &block_schema()))
}

async fn block_by_hash(
    State(state): State<AppState>,
    Path(blockhash): Path<String>,
) -> Result<Json<Value>, ApiError> {
    debug!(blockhash = %blockhash, "blocks/{blockhash}");
    let raw = hex::decode(&blockhash).map_err(|_| ApiError::InvalidHex(blockhash.clone()))?;
    match state.store.get(&raw) {
        Some(block) => Ok(Json(serialize_one(&block, &block_schema()))),
        None => Err(ApiError::BlockNotFound(blockhash)),
    }
}

async fn connected_peers(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    debug!("connected_peers/");
    let response = state
        .bridge
        .fetch(CONNECTED_PEER_ADDRESSES, None, make_peers_response)
        .await?;
    Ok(Json(response))
}

async fn known_peers(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    debug!("known_peers/");
    let response = state
        .bridge
        .fetch(KNOWN_PEER_ADDRESSES, None, make_peers_response)
        .await?;
    Ok(Json(response))
}

/// JSON projection of a [`Block`]: hash-like fields as hex, scalar
/// store fields passed through unmodified.
pub fn block_schema() -> Schema<Block> {
    Schema::new("blocks")
        .field("blockhash", |b: &Block| Value::String(b.hex_hash()))
        .hex_field("prevhash", |b| &b.prevhash)
        .hex_field("uncles_hash", |b| &b.uncles_hash)
        .hex_field("nonce", |b| &b.nonce)
        .hex_field("tx_list_root", |b| &b.tx_list_root)
        .field("number", |b: &Block| serde_json::json!(b.number))
        .field("difficulty", |b: &Block| serde_json::json!(b.difficulty))
        .field("timestamp", |b: &Block| serde_json::json!(b.timestamp))
}

/// JSON projection of a [`PeerAddress`].
pub fn peer_schema() -> Schema<PeerAddress> {
    Schema::new("peers")
        .field("ip", |p: &PeerAddress| Value::String(p.ip.clone()))
        .field("port", |p: &PeerAddress| Value::String(p.port.to_string()))
        .hex_field("node_id", |p| &p.node_id)
}

/// Format a peer-list bus payload into the `peers` envelope.
///
/// A payload of any other kind can only come from a misregistered
/// producer and projects as an empty list.
pub fn make_peers_response(payload: DataPayload) -> Value {
    match payload {
        DataPayload::PeerAddresses(peers) => serialize(&peers, &peer_schema()),
        DataPayload::Json(_) => serialize::<PeerAddress>(&[], &peer_schema()),
    }
}
