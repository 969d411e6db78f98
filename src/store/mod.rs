//! Key-Value Storage Module
//!
//! Implements the concurrent in-memory store and its HTTP surface.
//!
//! ## Core Concepts
//! - **Records**: Each key maps to at most one `Record` (payload bytes plus
//!   the media type they were accepted under). A write replaces the record in
//!   full; readers always observe a complete record, never a partial one.
//! - **Gating**: Writes are gated by the media classifier; only specific
//!   media types are ever persisted.
//! - **Negotiation**: Reads check the stored type against the client's
//!   `Accept` header and answer `406` on a mismatch.
//! - **Access**: `KeyValueStore` wraps a sharded concurrent map, so operations
//!   on different keys never block each other.

pub mod handlers;
pub mod memory;
pub mod types;
