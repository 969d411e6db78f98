//! Media Type Classification Module
//!
//! Pure string-level reasoning about media types, shared by the write and
//! read paths of the store.
//!
//! ## Responsibilities
//! - **Classification**: Deciding whether a raw `Content-Type` value is a
//!   specific `type/subtype`, a generic catch-all, or malformed. Generic and
//!   malformed declarations are never persisted.
//! - **Negotiation**: Matching a stored media type against the patterns of a
//!   client's `Accept` header, honoring `type/*` and `*/*` wildcards.
//!
//! ## Submodules
//! - **`classifier`**: The classification policy and its normalization rules.
//! - **`accept`**: The Accept-header compatibility check used on reads.

pub mod accept;
pub mod classifier;
