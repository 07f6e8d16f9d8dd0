//! SHA-256 hashing.
//!
//! The one and only hash function of this protocol. Transaction
//! identifiers, addresses, signing digests and the signed-message payload
//! all go through SHA-256; the double-hash variant exists solely for the
//! signed-message framing.

use sha2::{Digest, Sha256};

/// Computes the SHA-256 digest of `data`.
///
/// Returns a fixed 32-byte array — every consumer in this crate either
/// slices a fixed prefix off the digest or feeds it straight into the
/// signer, so the array type propagates naturally.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes `SHA-256(SHA-256(data))`.
///
/// Used by the signed-message payload, which double-hashes its framed
/// buffer. Transaction hashing is single SHA-256.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_empty_string_vector() {
        // The canonical test vector.
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_deterministic() {
        assert_eq!(sha256(b"lisk"), sha256(b"lisk"));
        assert_ne!(sha256(b"lisk"), sha256(b"Lisk"));
    }

    #[test]
    fn double_sha256_is_sha256_of_sha256() {
        let single = sha256(b"payload");
        assert_eq!(double_sha256(b"payload"), sha256(&single));
        assert_ne!(double_sha256(b"payload"), single);
    }
}
