//! Offline verification engine for Chainpoint proof-of-existence receipts.
//!
//! This crate provides:
//! - A generic Merkle inclusion-proof verifier reusable across digest algorithms
//! - Chain verification for v1.x receipts, yielding a blockchain anchor descriptor
//! - Proof replay for v2 receipts over the eight supported algorithms
//! - A unifying [`validate`] entry point over decoded receipt documents
//!
//! Core invariants:
//! - Verification is deterministic, synchronous, and offline
//! - Receipts are checked in a single fail-fast pass; the first violation wins
//! - No state survives a validation call; concurrent calls need no locking
//!
//! Proof length is issuer-controlled. Callers validating receipts from
//! untrusted sources should bound it before calling in; no bound is
//! enforced here.
//!
#![deny(missing_docs)]

/// Generic Merkle inclusion-proof replay.
pub mod merkle;
/// Chain verification for v1.x receipts.
pub mod v1;
/// Proof verification for v2 receipts.
pub mod v2;

pub use chainpoint_receipt::{Anchor, HashAlgorithm, Receipt, ValidationError};

use serde_json::Value;

/// Successful validation outcome, preserving the v1/v2 asymmetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// A v1.x receipt verified; carries the blockchain anchor descriptor.
    Anchored(Anchor),
    /// A v2 receipt verified. v2 validation synthesizes no anchor; callers
    /// needing anchor metadata must consult other receipt fields.
    Verified,
}

/// Validates a decoded receipt document.
///
/// Detects the schema generation, parses the document into its typed
/// form, and verifies that the inclusion proof reconstructs the declared
/// Merkle root.
pub fn validate(document: &Value) -> Result<ValidationOutcome, ValidationError> {
    match Receipt::from_value(document)? {
        Receipt::V1(receipt) => Ok(ValidationOutcome::Anchored(v1::verify(&receipt)?)),
        Receipt::V2(receipt) => {
            v2::verify(&receipt)?;
            Ok(ValidationOutcome::Verified)
        }
    }
}

/// Validates a receipt from its JSON text.
///
/// Convenience wrapper over [`validate`] for callers holding the raw
/// transport encoding. A document that does not parse as JSON is
/// reported as a schema error.
pub fn validate_str(receipt_json: &str) -> Result<ValidationOutcome, ValidationError> {
    let document: Value = serde_json::from_str(receipt_json)
        .map_err(|e| ValidationError::Schema(format!("invalid JSON: {e}")))?;
    validate(&document)
}
