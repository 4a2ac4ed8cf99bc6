//! Typed receipt structures and their parsers.
//!
//! [`Receipt::from_value`] resolves the schema generation once and runs
//! every field presence and format rule, so downstream verification
//! operates on strongly-typed fields with no repeated presence checks.

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::algorithm::{HashAlgorithm, V1_HASH_TYPE};
use crate::error::ValidationError;
use crate::guard::{require, require_hash, value_text};
use crate::version::{detect, SchemaVersion};

/// Hex length of every hash in a v1.x receipt (SHA-256).
const V1_HEX_LEN: usize = 64;

/// Anchor kind for Bitcoin OP_RETURN transactions, the only supported kind.
pub const ANCHOR_TYPE_BTC_OP_RETURN: &str = "BTCOpReturn";

/// Header section of a v1.x receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Declared hash type; always `"SHA-256"` after parsing.
    pub hash_type: String,
    /// Identifier of the anchoring blockchain transaction (64 hex chars).
    pub tx_id: String,
    /// Declared anchoring time as a Unix timestamp.
    pub timestamp: i64,
    /// Declared Merkle root (64 hex chars).
    pub merkle_root: String,
}

/// One node of a v1.x binary proof chain; carries both children and the
/// resulting parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofNode {
    /// Left child hash (64 hex chars).
    pub left: String,
    /// Right child hash (64 hex chars).
    pub right: String,
    /// Parent hash the children must recompute to (64 hex chars).
    pub parent: String,
}

/// Target section of a v1.x receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Leaf hash whose inclusion is being proven (64 hex chars).
    pub target_hash: String,
    /// Ordered proof-node chain from the target hash to the root.
    pub target_proof: Vec<ProofNode>,
}

/// A parsed v1.x receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct V1Receipt {
    /// Header section.
    pub header: Header,
    /// Target section.
    pub target: Target,
}

/// Which side of the concatenation a v2 sibling hash occupies in the
/// original tree order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Sibling precedes the running hash.
    Left,
    /// Sibling follows the running hash.
    Right,
}

/// One single-sibling step of a v2 inclusion proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    /// Side the sibling occupies.
    pub side: Side,
    /// Sibling hash (hex, at the receipt algorithm's length).
    pub sibling: String,
}

/// A parsed v2 receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct V2Receipt {
    /// Raw type tag the receipt declared, e.g. `"ChainpointSHA256v2"`.
    pub type_tag: String,
    /// Digest algorithm resolved from the type tag.
    pub algorithm: HashAlgorithm,
    /// Ordered single-sibling proof steps.
    pub proof: Vec<ProofStep>,
    /// Leaf hash whose inclusion is being proven.
    pub target_hash: String,
    /// Declared Merkle root.
    pub merkle_root: String,
}

/// A decoded receipt, resolved to its schema generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    /// Chainpoint 1.0/1.1 receipt.
    V1(V1Receipt),
    /// Chainpoint v2 receipt.
    V2(V2Receipt),
}

/// Blockchain anchor descriptor returned by successful v1.x validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anchor {
    /// Anchor kind; always [`ANCHOR_TYPE_BTC_OP_RETURN`].
    #[serde(rename = "type")]
    pub anchor_type: String,
    /// Opaque identifier of the anchoring transaction, echoed from the
    /// receipt header without any on-chain confirmation.
    pub source_id: String,
    /// Merkle root fixed by the anchor (64 hex chars).
    pub merkle_root: String,
}

impl Receipt {
    /// Parses a decoded document into a typed receipt.
    ///
    /// Runs schema detection and every field presence/format rule; the
    /// returned value is ready for proof verification.
    pub fn from_value(document: &Value) -> Result<Self, ValidationError> {
        let object = document.as_object().ok_or_else(|| {
            ValidationError::Schema("receipt must be a JSON object".to_string())
        })?;
        match detect(object)? {
            SchemaVersion::V1_0 | SchemaVersion::V1_1 => Ok(Receipt::V1(parse_v1(object)?)),
            SchemaVersion::V2 { type_tag } => Ok(Receipt::V2(parse_v2(object, type_tag)?)),
        }
    }
}

fn parse_v1(receipt: &Map<String, Value>) -> Result<V1Receipt, ValidationError> {
    let header_value = require(receipt, "header")?;
    let header = header_value
        .as_object()
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "header",
            value: value_text(header_value),
        })?;

    let hash_type_value = require(header, "hash_type")?;
    let hash_type = match hash_type_value.as_str() {
        Some(V1_HASH_TYPE) => V1_HASH_TYPE.to_string(),
        _ => {
            return Err(ValidationError::InvalidFormat {
                field: "hash_type",
                value: value_text(hash_type_value),
            })
        }
    };

    let tx_id = require_hash(header, "tx_id", V1_HEX_LEN)?.to_string();
    let merkle_root = require_hash(header, "merkle_root", V1_HEX_LEN)?.to_string();

    let timestamp_value = require(header, "timestamp")?;
    let timestamp = timestamp_value
        .as_i64()
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "timestamp",
            value: value_text(timestamp_value),
        })?;

    let target_value = require(receipt, "target")?;
    let target = target_value
        .as_object()
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "target",
            value: value_text(target_value),
        })?;

    let target_hash = require_hash(target, "target_hash", V1_HEX_LEN)?.to_string();

    let proof_value = require(target, "target_proof")?;
    let nodes = proof_value
        .as_array()
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "target_proof",
            value: value_text(proof_value),
        })?;

    let mut target_proof = Vec::with_capacity(nodes.len());
    for node_value in nodes {
        let node = node_value
            .as_object()
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "target_proof",
                value: value_text(node_value),
            })?;
        target_proof.push(ProofNode {
            left: require_hash(node, "left", V1_HEX_LEN)?.to_string(),
            right: require_hash(node, "right", V1_HEX_LEN)?.to_string(),
            parent: require_hash(node, "parent", V1_HEX_LEN)?.to_string(),
        });
    }

    Ok(V1Receipt {
        header: Header {
            hash_type,
            tx_id,
            timestamp,
            merkle_root,
        },
        target: Target {
            target_hash,
            target_proof,
        },
    })
}

fn parse_v2(receipt: &Map<String, Value>, type_tag: String) -> Result<V2Receipt, ValidationError> {
    let algorithm =
        HashAlgorithm::from_type_tag(&type_tag).ok_or_else(|| ValidationError::InvalidFormat {
            field: "type",
            value: type_tag.clone(),
        })?;
    let hex_len = algorithm.hex_len();

    let target_hash = require_hash(receipt, "targetHash", hex_len)?.to_string();
    let merkle_root = require_hash(receipt, "merkleRoot", hex_len)?.to_string();

    let proof_value = require(receipt, "proof")?;
    let elements = proof_value
        .as_array()
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "proof",
            value: value_text(proof_value),
        })?;

    let pattern = Regex::new(&format!("^[A-Fa-f0-9]{{{hex_len}}}$")).expect("invalid regex");
    let mut proof = Vec::with_capacity(elements.len());
    for element in elements {
        // `left` is checked before `right`; an element carrying both is
        // read as a left sibling.
        let (side, sibling_value) = element
            .as_object()
            .and_then(|entry| {
                if let Some(value) = entry.get("left") {
                    Some((Side::Left, value))
                } else {
                    entry.get("right").map(|value| (Side::Right, value))
                }
            })
            .ok_or_else(|| {
                ValidationError::InvalidProof(
                    "proof step carries neither a left nor a right sibling".to_string(),
                )
            })?;
        let sibling = sibling_value
            .as_str()
            .filter(|text| pattern.is_match(text))
            .ok_or_else(|| {
                ValidationError::InvalidProof("proof step sibling is not a valid hash".to_string())
            })?;
        proof.push(ProofStep {
            side,
            sibling: sibling.to_string(),
        });
    }

    Ok(V2Receipt {
        type_tag,
        algorithm,
        proof,
        target_hash,
        merkle_root,
    })
}
