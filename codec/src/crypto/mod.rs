//! Cryptographic primitives consumed by the codec.
//!
//! Two opaque capabilities, exactly as the protocol demands: Ed25519
//! (seed keypairs, detached sign, detached verify) and SHA-256. Both are
//! stateless and reentrant — callers may sign many transactions from many
//! threads without coordination.

pub mod hash;
pub mod keys;

pub use hash::{double_sha256, sha256};
pub use keys::{KeyError, Keypair, PublicKey, Signature};
