//! Proof verification for v2 receipts.

use chainpoint_receipt::{V2Receipt, ValidationError};

use crate::merkle;

/// Verifies a parsed v2 receipt against its declared Merkle root.
///
/// An empty proof is accepted only when the target hash and the root are
/// the same hex string. Otherwise the proof is replayed through
/// [`merkle::verify_inclusion`] with the receipt's digest algorithm.
pub fn verify(receipt: &V2Receipt) -> Result<(), ValidationError> {
    if receipt.proof.is_empty() {
        if receipt.target_hash != receipt.merkle_root {
            return Err(ValidationError::InvalidProof(
                "merkle root does not match".to_string(),
            ));
        }
        return Ok(());
    }

    let valid = merkle::verify_inclusion(
        receipt.algorithm,
        &receipt.target_hash,
        &receipt.proof,
        &receipt.merkle_root,
    )?;
    if !valid {
        return Err(ValidationError::InvalidProof(
            "proof does not reconstruct the merkle root".to_string(),
        ));
    }
    Ok(())
}
