//! Ed25519 keypairs, public keys and signatures.
//!
//! Thin, typed wrappers over ed25519-dalek. The wrappers buy us three
//! things: a single place to audit every signing operation, fixed-size
//! types that make a 31-byte "public key" unrepresentable, and hex
//! accessors matching the wire conventions of the network.
//!
//! Keypair derivation follows the network's convention: the Ed25519 seed is
//! the SHA-256 digest of the account secret, so the same passphrase yields
//! the same keypair on every platform backend. That substitutability is a
//! hard protocol requirement, not an optimization.
//!
//! Secret key material is never logged and never appears in `Debug` output.

use ed25519_dalek::{
    Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey,
};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

use super::hash::sha256;

/// Errors during key or signature parsing.
///
/// Deliberately vague about *why* parsing failed — error messages are not
/// the place to leak structure about key material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("invalid public key: expected 32 bytes of a valid Ed25519 point")]
    InvalidPublicKey,

    #[error("invalid signature: expected 64 bytes")]
    InvalidSignature,

    #[error("invalid secret key: expected 32 bytes")]
    InvalidSecretKey,
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

/// A 32-byte Ed25519 public key.
///
/// This is the on-chain identity of an account; the account address is
/// derived from it (see [`crate::transaction::address`]). Safe to share,
/// log and embed in transactions.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Wraps raw public key bytes without point validation.
    ///
    /// Serialization only needs the raw bytes; validation happens when the
    /// key is actually used to verify (`verify` parses the point and
    /// returns `false` for degenerate encodings).
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parses a public key from a byte slice, checking the length.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; 32] = slice.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Parses a hex-encoded public key (64 characters).
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::try_from_slice(&bytes)
    }

    /// The raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Verifies a detached signature over `message` against this key.
    ///
    /// Returns `false` for invalid signatures and for byte strings that are
    /// not valid curve points — callers want a yes/no answer, and a
    /// detailed failure oracle helps nobody.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.0) else {
            return false;
        };
        let sig = DalekSignature::from_bytes(signature.as_bytes());
        verifying_key.verify(message, &sig).is_ok()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// A 64-byte detached Ed25519 signature.
///
/// Deterministic for a given (key, message) pair — RFC 8032, no nonce
/// management, no RNG at signing time. The fixed-size representation means
/// a truncated signature cannot exist past the parsing boundary.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; 64]);

impl Signature {
    /// Wraps raw signature bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Parses a signature from a byte slice, checking the length.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; 64] = slice.try_into().map_err(|_| KeyError::InvalidSignature)?;
        Ok(Self(bytes))
    }

    /// Parses a hex-encoded signature (128 characters).
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidSignature)?;
        Self::try_from_slice(&bytes)
    }

    /// The raw 64 bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Lowercase hex, 128 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = self.to_hex();
        write!(f, "Signature({}..{})", &hex_str[..8], &hex_str[120..])
    }
}

// ---------------------------------------------------------------------------
// Keypair
// ---------------------------------------------------------------------------

/// An Ed25519 signing keypair.
///
/// No `Serialize`/`Deserialize` on purpose: persisting secret key material
/// should be a deliberate act, not a side effect of shoving a keypair into
/// a JSON response. Use [`Keypair::secret_bytes`] explicitly if you must.
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generates a fresh keypair from the OS cryptographic RNG.
    ///
    /// Mostly useful in tests and tooling; real accounts derive from a
    /// passphrase via [`Keypair::from_passphrase`].
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Constructs the keypair deterministically from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Derives the keypair from an account secret, network-style:
    /// `seed = SHA-256(secret)`, then an Ed25519 seed keypair.
    ///
    /// Same secret, same keypair, on every platform. This is the idempotence
    /// the whole wallet ecosystem leans on.
    pub fn from_passphrase(secret: &str) -> Self {
        Self::from_seed(&sha256(secret.as_bytes()))
    }

    /// The public half of the keypair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Signs `message` and returns the detached 64-byte signature.
    ///
    /// The codec always signs a SHA-256 digest, never raw transaction
    /// bytes — see [`crate::transaction::signing::calc_signature`].
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature(self.signing_key.sign(message).to_bytes())
    }

    /// Exports the raw 32-byte seed. Handle with care; this is the whole
    /// account.
    pub fn secret_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl Clone for Keypair {
    fn clone(&self) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&self.signing_key.to_bytes()),
        }
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret material, not even partially.
        write!(f, "Keypair(pub={})", self.public_key().to_hex())
    }
}
