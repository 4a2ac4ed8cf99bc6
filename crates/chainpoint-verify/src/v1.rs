//! Chain verification for v1.x receipts.

use chainpoint_receipt::{
    Anchor, HashAlgorithm, V1Receipt, ValidationError, ANCHOR_TYPE_BTC_OP_RETURN,
};

/// Verifies a parsed v1.x receipt and returns its anchor descriptor.
///
/// A single cursor walks the proof-node chain, starting at the target
/// hash: every node must hash to its own parent and reference the cursor
/// as one of its children, and the final parent must equal the header's
/// Merkle root. No alternate branch is explored when sibling hashes
/// collide; only the current cursor value is checked.
///
/// The v1 wire rule digests the concatenated hex text of both children
/// (not their raw bytes, unlike v2), and compares hashes as exact
/// lowercase-hex strings.
pub fn verify(receipt: &V1Receipt) -> Result<Anchor, ValidationError> {
    let mut last_matched = receipt.target.target_hash.as_str();

    for node in &receipt.target.target_proof {
        let text = format!("{}{}", node.left, node.right);
        let node_hash = hex::encode(HashAlgorithm::Sha256.digest(text.as_bytes()));
        if node.parent != node_hash {
            return Err(ValidationError::InvalidProof(
                "node children do not hash to the declared parent".to_string(),
            ));
        }
        if node.left != last_matched && node.right != last_matched {
            return Err(ValidationError::InvalidProof(
                "node does not reference the running chain value".to_string(),
            ));
        }
        last_matched = node.parent.as_str();
    }

    if last_matched != receipt.header.merkle_root {
        return Err(ValidationError::InvalidProof(
            "merkle root does not match".to_string(),
        ));
    }

    Ok(Anchor {
        anchor_type: ANCHOR_TYPE_BTC_OP_RETURN.to_string(),
        source_id: receipt.header.tx_id.clone(),
        merkle_root: receipt.header.merkle_root.clone(),
    })
}
