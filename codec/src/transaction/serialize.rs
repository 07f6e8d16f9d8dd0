//! Canonical byte serialization.
//!
//! This is the interoperability contract. The layout, in order, no padding:
//!
//! ```text
//! 1   byte   type
//! 4   bytes  timestamp, u32 LE
//! 32  bytes  sender public key
//! 32  bytes  requester public key        (only if present)
//! 8   bytes  recipient address payload   (zero-filled if absent)
//! 8   bytes  amount, u64 LE
//! var        asset segment               (per-type, see asset_bytes)
//! 64  bytes  signature                   (unless skipped / absent)
//! 64  bytes  second signature            (unless skipped / absent)
//! ```
//!
//! The same bytes feed both signing (with the signature fields skipped) and
//! identifier derivation (with everything included). The buffer is sized
//! exactly up front; trailing garbage in a signed payload would corrupt
//! every signature derived from it.

use super::address::address_bytes;
use super::types::{Asset, Transaction, TxType};
use crate::error::CodecError;

/// Controls which attached signatures participate in the byte layout.
///
/// Signing the primary signature skips both (the payload must not contain
/// any signature); signing the second signature skips only itself (it
/// covers the primary one); identifier derivation skips nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignOptions {
    pub skip_signature: bool,
    pub skip_second_sign: bool,
}

impl SignOptions {
    /// Include every attached signature — the identifier layout.
    pub fn full() -> Self {
        Self {
            skip_signature: false,
            skip_second_sign: false,
        }
    }

    /// Exclude all signatures — the primary-signing layout.
    pub fn unsigned() -> Self {
        Self {
            skip_signature: true,
            skip_second_sign: true,
        }
    }

    /// Include the primary signature only — the second-signing layout.
    pub fn primary_only() -> Self {
        Self {
            skip_signature: false,
            skip_second_sign: true,
        }
    }
}

impl Default for SignOptions {
    fn default() -> Self {
        Self::full()
    }
}

/// Encodes the type-specific asset segment.
///
/// Per type: send has no segment; second-signature is the raw 32-byte key;
/// delegate is the UTF-8 username; vote is the concatenated vote strings
/// (no separators — each entry already carries its `+`/`-` prefix and hex
/// key); multisignature is one byte `min`, one byte `lifetime`, then the
/// concatenated keysgroup.
///
/// An empty vote list yields an empty segment; a vote transaction with no
/// asset at all is an error — the two cases are deliberately distinct.
/// Unknown wire types yield an empty segment regardless of what they carry:
/// this layer is permissive so foreign transaction types survive a
/// round-trip, while the transform layer stays strict.
pub fn asset_bytes(tx: &Transaction) -> Result<Vec<u8>, CodecError> {
    match (tx.tx_type, &tx.asset) {
        (TxType::Other(_), _) => Ok(Vec::new()),
        (TxType::Send, None) => Ok(Vec::new()),
        (TxType::Send, Some(_)) => Err(CodecError::AssetMismatch(tx.tx_type)),

        (TxType::SecondSignature, Some(Asset::SecondSignature { public_key })) => {
            Ok(public_key.as_bytes().to_vec())
        }
        (TxType::Delegate, Some(Asset::Delegate { username })) => {
            Ok(username.as_bytes().to_vec())
        }
        (TxType::Vote, Some(Asset::Vote { votes })) => Ok(votes.concat().into_bytes()),
        (TxType::Multisignature, Some(Asset::Multisignature { min, lifetime, keysgroup })) => {
            let keys = keysgroup.concat().into_bytes();
            let mut segment = Vec::with_capacity(2 + keys.len());
            segment.push(*min);
            segment.push(*lifetime);
            segment.extend_from_slice(&keys);
            Ok(segment)
        }

        (_, None) => Err(CodecError::MissingAsset(tx.tx_type)),
        (_, Some(_)) => Err(CodecError::AssetMismatch(tx.tx_type)),
    }
}

/// Assembles the canonical byte buffer for `tx` under `opts`.
pub fn to_bytes(tx: &Transaction, opts: SignOptions) -> Result<Vec<u8>, CodecError> {
    let asset = asset_bytes(tx)?;

    let signature = (!opts.skip_signature).then_some(tx.signature).flatten();
    let sign_signature = (!opts.skip_second_sign)
        .then_some(tx.sign_signature)
        .flatten();

    let capacity = 1
        + 4
        + 32
        + if tx.requester_public_key.is_some() { 32 } else { 0 }
        + 8
        + 8
        + asset.len()
        + if signature.is_some() { 64 } else { 0 }
        + if sign_signature.is_some() { 64 } else { 0 };
    let mut buf = Vec::with_capacity(capacity);

    buf.push(tx.tx_type.as_u8());
    buf.extend_from_slice(&tx.timestamp.to_le_bytes());
    buf.extend_from_slice(tx.sender_public_key.as_bytes());
    if let Some(requester) = &tx.requester_public_key {
        buf.extend_from_slice(requester.as_bytes());
    }
    match &tx.recipient_id {
        Some(recipient) => buf.extend_from_slice(&address_bytes(recipient)?),
        None => buf.extend_from_slice(&[0u8; 8]),
    }
    buf.extend_from_slice(&tx.amount.to_le_bytes());
    buf.extend_from_slice(&asset);
    if let Some(sig) = signature {
        buf.extend_from_slice(sig.as_bytes());
    }
    if let Some(sig) = sign_signature {
        buf.extend_from_slice(sig.as_bytes());
    }

    debug_assert_eq!(buf.len(), capacity, "canonical buffer size miscomputed");
    Ok(buf)
}
