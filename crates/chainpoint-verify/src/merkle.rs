//! Generic Merkle inclusion-proof replay.

use chainpoint_receipt::{HashAlgorithm, ProofStep, Side, ValidationError};

/// Replays an inclusion proof and reports whether it reconstructs the root.
///
/// The running hash starts at the decoded target hash. Each step hashes
/// the sibling prepended (`Left`) or appended (`Right`) to the running
/// value; concatenation operates on raw digest bytes, never on hex text.
/// A proof with zero steps is valid iff the target hash already equals
/// the root.
pub fn verify_inclusion(
    algorithm: HashAlgorithm,
    target_hash: &str,
    steps: &[ProofStep],
    merkle_root: &str,
) -> Result<bool, ValidationError> {
    let root = decode(merkle_root)?;
    let mut current = decode(target_hash)?;
    for step in steps {
        let sibling = decode(&step.sibling)?;
        let combined = match step.side {
            Side::Left => [sibling, current].concat(),
            Side::Right => [current, sibling].concat(),
        };
        current = algorithm.digest(&combined);
    }
    Ok(current == root)
}

fn decode(hash: &str) -> Result<Vec<u8>, ValidationError> {
    hex::decode(hash)
        .map_err(|_| ValidationError::InvalidProof(format!("'{hash}' is not a valid hex hash")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(side: Side, sibling: &str) -> ProofStep {
        ProofStep {
            side,
            sibling: sibling.to_string(),
        }
    }

    #[test]
    fn empty_proof_is_valid_iff_target_equals_root() {
        let hash = "ab".repeat(32);
        let other = "cd".repeat(32);
        assert!(verify_inclusion(HashAlgorithm::Sha256, &hash, &[], &hash).unwrap());
        assert!(!verify_inclusion(HashAlgorithm::Sha256, &hash, &[], &other).unwrap());
    }

    #[test]
    fn byte_equal_hashes_match_across_hex_case() {
        let lower = "ab".repeat(32);
        let upper = "AB".repeat(32);
        assert!(verify_inclusion(HashAlgorithm::Sha256, &lower, &[], &upper).unwrap());
    }

    #[test]
    fn side_order_decides_the_concatenation() {
        let target = "ab".repeat(32);
        let sibling = "cd".repeat(32);
        let mut concatenated = hex::decode(&target).unwrap();
        concatenated.extend(hex::decode(&sibling).unwrap());
        let root = hex::encode(HashAlgorithm::Sha256.digest(&concatenated));

        let right = [step(Side::Right, &sibling)];
        let left = [step(Side::Left, &sibling)];
        assert!(verify_inclusion(HashAlgorithm::Sha256, &target, &right, &root).unwrap());
        assert!(!verify_inclusion(HashAlgorithm::Sha256, &target, &left, &root).unwrap());
    }

    #[test]
    fn malformed_hex_is_an_invalid_proof() {
        let hash = "ab".repeat(32);
        assert!(matches!(
            verify_inclusion(HashAlgorithm::Sha256, "zz", &[], &hash),
            Err(ValidationError::InvalidProof(_))
        ));
    }
}
