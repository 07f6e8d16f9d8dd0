//! Arbitrary message signing.
//!
//! Wallet-style message signatures never cover the raw message: the message
//! is framed with a fixed network prefix first, both parts length-prefixed
//! with a CompactSize varint, and the frame is hashed twice with SHA-256.
//! The prefix prevents a signed message from doubling as a valid
//! transaction payload, and the double hash matches what existing wallet
//! tooling produces.
//!
//! ```text
//! payload = SHA-256(SHA-256(varint(|prefix|) || prefix || varint(|msg|) || msg))
//! ```

use crate::bytes::write_varint;
use crate::config::NetworkParams;
use crate::crypto::hash::double_sha256;
use crate::crypto::keys::{Keypair, PublicKey, Signature};

/// The 32-byte digest a message signature covers.
pub fn signable_payload(message: &[u8], params: &NetworkParams) -> [u8; 32] {
    let prefix = params.message_prefix.as_bytes();
    let mut frame = Vec::with_capacity(prefix.len() + message.len() + 18);
    write_varint(&mut frame, prefix.len() as u64);
    frame.extend_from_slice(prefix);
    write_varint(&mut frame, message.len() as u64);
    frame.extend_from_slice(message);
    double_sha256(&frame)
}

/// Signs a message with the network's framing.
pub fn sign_message(message: &[u8], keypair: &Keypair, params: &NetworkParams) -> Signature {
    keypair.sign(&signable_payload(message, params))
}

/// Verifies a framed message signature. Returns `false` for a wrong
/// signature, a wrong key, or a message signed under a different prefix.
pub fn verify_message(
    message: &[u8],
    signature: &Signature,
    public_key: &PublicKey,
    params: &NetworkParams,
) -> bool {
    public_key.verify(&signable_payload(message, params), signature)
}
