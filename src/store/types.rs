//! Storage Contracts
//!
//! The data shapes exchanged between the engine and its HTTP handlers: the
//! stored record and the error taxonomy that maps one-to-one onto response
//! status codes.

use bytes::Bytes;

/// The stored value for one key.
///
/// `payload` is a `Bytes` handle, so cloning a record out of the map is a
/// reference-count bump rather than a byte copy; a reader's clone is a
/// complete snapshot taken under the map's shard lock.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The exact media type the payload was accepted under. Always a
    /// specific `type/subtype`; generic declarations are rejected before a
    /// record is built.
    pub content_type: String,
    /// The raw bytes, arbitrary length (including empty).
    pub payload: Bytes,
}

/// Failure modes of a single get/set, each resolved to exactly one HTTP
/// status at the handler boundary. The `Display` text doubles as the
/// plain-text response body for the client-facing variants.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested key has no record. Surfaced as `404`.
    #[error("no value stored under key '{0}'")]
    NotFound(String),

    /// A record exists but its media type cannot satisfy the `Accept`
    /// header. Surfaced as `406`.
    #[error("stored media type '{stored}' does not satisfy accept header '{requested}'")]
    NotAcceptable { stored: String, requested: String },

    /// A write declared a catch-all media type. Surfaced as `400`.
    #[error("media type '{0}' is too generic to store")]
    GenericMediaType(String),

    /// A write arrived without a parseable `Content-Type`. Surfaced as `400`.
    #[error("missing or malformed content-type header")]
    MalformedMediaType,

    /// Unexpected fault in the storage path. Surfaced as `500`; the detail
    /// is logged, never sent to the client.
    #[error("storage backend failure: {0}")]
    Internal(String),
}
