//! Signing and identifier derivation.
//!
//! A signature never covers raw transaction bytes: the canonical buffer is
//! hashed with SHA-256 first and the digest is what gets signed. Order is
//! fixed and matters:
//!
//! 1. primary signature — over the unsigned payload,
//! 2. second signature — over the payload *including* the primary one,
//! 3. identifier — over the fully signed payload.
//!
//! Re-deriving the identifier after any further mutation yields a different
//! id; once an id has been derived the transaction is frozen by convention.

use tracing::{debug, trace};

use super::serialize::{to_bytes, SignOptions};
use super::types::Transaction;
use crate::bytes::reversed_prefix_u64;
use crate::crypto::hash::sha256;
use crate::crypto::keys::{Keypair, PublicKey, Signature};
use crate::error::CodecError;

/// Computes a detached signature over the canonical bytes selected by
/// `opts`, without attaching it.
pub fn calc_signature(
    tx: &Transaction,
    keypair: &Keypair,
    opts: SignOptions,
) -> Result<Signature, CodecError> {
    let digest = sha256(&to_bytes(tx, opts)?);
    Ok(keypair.sign(&digest))
}

/// Attaches the primary (sender) signature.
///
/// Signs the unsigned payload (`SignOptions::unsigned()`) and stores the
/// result in `tx.signature`, overwriting any previous value.
pub fn sign(tx: &mut Transaction, keypair: &Keypair) -> Result<(), CodecError> {
    let signature = calc_signature(tx, keypair, SignOptions::unsigned())?;
    trace!(tx_type = %tx.tx_type, "attached primary signature");
    tx.signature = Some(signature);
    Ok(())
}

/// Attaches the second signature for accounts with a registered secondary
/// key.
///
/// The secondary signature covers the payload including the primary one
/// (`SignOptions::primary_only()`), so the primary signature must already
/// be attached.
pub fn second_sign(tx: &mut Transaction, keypair: &Keypair) -> Result<(), CodecError> {
    if tx.signature.is_none() {
        return Err(CodecError::MissingPrimarySignature);
    }
    let signature = calc_signature(tx, keypair, SignOptions::primary_only())?;
    trace!(tx_type = %tx.tx_type, "attached second signature");
    tx.sign_signature = Some(signature);
    Ok(())
}

/// Signs with the primary key and, when given, the secondary key — in the
/// only order that produces valid signatures.
pub fn sign_with(
    tx: &mut Transaction,
    keypair: &Keypair,
    second_keypair: Option<&Keypair>,
) -> Result<(), CodecError> {
    sign(tx, keypair)?;
    if let Some(second) = second_keypair {
        second_sign(tx, second)?;
    }
    Ok(())
}

/// Derives the transaction identifier.
///
/// SHA-256 over the fully signed bytes, first 8 digest bytes reversed,
/// rendered as an unsigned decimal string. Deterministic: identical fields
/// (signatures included) always yield an identical id.
pub fn identifier(tx: &Transaction) -> Result<String, CodecError> {
    let digest = sha256(&to_bytes(tx, SignOptions::full())?);
    let id = reversed_prefix_u64(&digest).to_string();
    debug!(tx_type = %tx.tx_type, id = %id, "derived transaction id");
    Ok(id)
}

/// Verifies the attached primary signature against the sender public key.
///
/// Returns `Ok(false)` for a present-but-wrong signature and an error only
/// when the transaction cannot be serialized at all.
pub fn verify(tx: &Transaction) -> Result<bool, CodecError> {
    let Some(signature) = &tx.signature else {
        return Ok(false);
    };
    let digest = sha256(&to_bytes(tx, SignOptions::unsigned())?);
    Ok(tx.sender_public_key.verify(&digest, signature))
}

/// Verifies the attached second signature against the account's registered
/// secondary public key.
pub fn verify_second(tx: &Transaction, second_public_key: &PublicKey) -> Result<bool, CodecError> {
    let Some(signature) = &tx.sign_signature else {
        return Ok(false);
    };
    let digest = sha256(&to_bytes(tx, SignOptions::primary_only())?);
    Ok(second_public_key.verify(&digest, signature))
}
