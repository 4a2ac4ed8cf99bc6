//! Document model for Chainpoint proof-of-existence receipts.
//!
//! This crate provides:
//! - The flat validation error taxonomy shared by both schema generations
//! - Field presence and hash-format guards with the wire format's truthiness rules
//! - The digest algorithm table for the v1.x and v2 schema generations
//! - Schema generation detection and parsing into typed receipt structures
//!
//! Core invariants:
//! - Receipts are immutable value objects built in a single parse pass
//! - Parsing is deterministic and offline; no I/O, no shared state
//! - The first violated rule wins; errors are never accumulated
//!
#![deny(missing_docs)]

/// Digest algorithm table for both schema generations.
pub mod algorithm;
/// Error types for receipt validation.
pub mod error;
/// Field presence and hash-format guards.
pub mod guard;
/// Typed receipt structures and their parsers.
pub mod receipt;
/// Schema generation detection.
pub mod version;

pub use algorithm::{HashAlgorithm, V1_HASH_TYPE, V2_HASH_ALGORITHMS};
pub use error::ValidationError;
pub use receipt::{
    Anchor, Header, ProofNode, ProofStep, Receipt, Side, Target, V1Receipt, V2Receipt,
    ANCHOR_TYPE_BTC_OP_RETURN,
};
pub use version::{detect, SchemaVersion};
