//! Media-Typed Key-Value Store Library
//!
//! This library crate defines the core modules of the key-value server.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of two loosely coupled subsystems:
//!
//! - **`media`**: The content-negotiation layer. Classifies raw `Content-Type`
//!   strings (specific vs. generic vs. malformed) and decides whether a stored
//!   media type satisfies a client's `Accept` header.
//! - **`store`**: The storage layer. Implements the concurrent in-memory
//!   key-value engine and the HTTP handlers that translate its outcomes into
//!   status codes.

pub mod media;
pub mod store;
