//! Digest algorithm table for receipt validation.
//!
//! v1.x receipts support a single hash type, named `"SHA-256"` in the
//! header. v2 receipts embed one of eight algorithm names in their type
//! tag (`Chainpoint<name>v2`); each name ends in the digest bit length,
//! which fixes the expected hex length of every hash in the receipt.

use regex::Regex;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

/// The only hash type accepted in v1.x receipt headers.
pub const V1_HASH_TYPE: &str = "SHA-256";

/// Digest algorithms supported by v2 receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-224 (`SHA224`).
    Sha224,
    /// SHA-256 (`SHA256`).
    Sha256,
    /// SHA-384 (`SHA384`).
    Sha384,
    /// SHA-512 (`SHA512`).
    Sha512,
    /// SHA3-224 (`SHA3-224`).
    Sha3_224,
    /// SHA3-256 (`SHA3-256`).
    Sha3_256,
    /// SHA3-384 (`SHA3-384`).
    Sha3_384,
    /// SHA3-512 (`SHA3-512`).
    Sha3_512,
}

/// All supported v2 algorithms, in type-tag name order.
pub const V2_HASH_ALGORITHMS: [HashAlgorithm; 8] = [
    HashAlgorithm::Sha224,
    HashAlgorithm::Sha256,
    HashAlgorithm::Sha384,
    HashAlgorithm::Sha512,
    HashAlgorithm::Sha3_224,
    HashAlgorithm::Sha3_256,
    HashAlgorithm::Sha3_384,
    HashAlgorithm::Sha3_512,
];

impl HashAlgorithm {
    /// Parses the algorithm name as it appears inside a v2 type tag.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "SHA224" => Some(Self::Sha224),
            "SHA256" => Some(Self::Sha256),
            "SHA384" => Some(Self::Sha384),
            "SHA512" => Some(Self::Sha512),
            "SHA3-224" => Some(Self::Sha3_224),
            "SHA3-256" => Some(Self::Sha3_256),
            "SHA3-384" => Some(Self::Sha3_384),
            "SHA3-512" => Some(Self::Sha3_512),
            _ => None,
        }
    }

    /// Extracts the algorithm from a full v2 type tag (`Chainpoint<name>v2`).
    pub fn from_type_tag(type_tag: &str) -> Option<Self> {
        let captures = Regex::new("^Chainpoint(.*)v2$")
            .expect("invalid regex")
            .captures(type_tag)?;
        Self::from_type_name(captures.get(1)?.as_str())
    }

    /// Name of the algorithm as embedded in v2 type tags.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
        }
    }

    /// Digest length in bits (the trailing token of the type name).
    pub fn bits(&self) -> usize {
        match self {
            Self::Sha224 | Self::Sha3_224 => 224,
            Self::Sha256 | Self::Sha3_256 => 256,
            Self::Sha384 | Self::Sha3_384 => 384,
            Self::Sha512 | Self::Sha3_512 => 512,
        }
    }

    /// Expected hex-character length of hashes under this algorithm.
    pub fn hex_len(&self) -> usize {
        self.bits() / 4
    }

    /// Computes the digest of raw bytes.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha224 => Sha224::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha384 => Sha384::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
            Self::Sha3_224 => Sha3_224::digest(data).to_vec(),
            Self::Sha3_256 => Sha3_256::digest(data).to_vec(),
            Self::Sha3_384 => Sha3_384::digest(data).to_vec(),
            Self::Sha3_512 => Sha3_512::digest(data).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tag_round_trips_for_every_algorithm() {
        for algorithm in V2_HASH_ALGORITHMS {
            let tag = format!("Chainpoint{}v2", algorithm.type_name());
            assert_eq!(HashAlgorithm::from_type_tag(&tag), Some(algorithm));
        }
    }

    #[test]
    fn unsupported_names_are_rejected() {
        for tag in ["ChainpointSHA1v2", "Chainpointv2", "ChainpointSHA256v3", "SHA256"] {
            assert_eq!(HashAlgorithm::from_type_tag(tag), None);
        }
    }

    #[test]
    fn hex_len_is_a_quarter_of_the_bit_length() {
        assert_eq!(HashAlgorithm::Sha224.hex_len(), 56);
        assert_eq!(HashAlgorithm::Sha256.hex_len(), 64);
        assert_eq!(HashAlgorithm::Sha3_384.hex_len(), 96);
        assert_eq!(HashAlgorithm::Sha3_512.hex_len(), 128);
    }

    #[test]
    fn digest_length_matches_declared_bits() {
        for algorithm in V2_HASH_ALGORITHMS {
            assert_eq!(algorithm.digest(b"abc").len() * 8, algorithm.bits());
        }
    }
}
