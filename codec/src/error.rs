//! Codec error types.
//!
//! One enum for the whole crate: serialization, signing and the request
//! transform all fail in a handful of well-known ways and callers usually
//! handle them at the same spot. Message texts that reach end users (wallet
//! UIs surface these verbatim) keep the wording existing tooling emits.

use thiserror::Error;

use crate::transaction::types::TxType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A request reached the transform without a sender public key.
    #[error("Please set sender publicKey")]
    MissingSenderPublicKey,

    /// A known transaction type that requires an asset has none attached.
    #[error("missing asset for transaction type {0}")]
    MissingAsset(TxType),

    /// The attached asset variant does not belong to the transaction type.
    #[error("asset does not match transaction type {0}")]
    AssetMismatch(TxType),

    /// A postable form was requested for an unsigned transaction.
    #[error("transaction is not signed")]
    MissingSignature,

    /// Second signing was attempted before the primary signature.
    #[error("primary signature must be attached before the second signature")]
    MissingPrimarySignature,

    /// An address string is not decimal digits followed by one letter.
    #[error("invalid address {0:?}")]
    InvalidAddress(String),

    /// An address whose numeric part does not fit the 8-byte payload.
    #[error("address {0:?} exceeds the 8-byte payload")]
    AddressOverflow(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_wire_type() {
        assert_eq!(
            CodecError::MissingAsset(TxType::Vote).to_string(),
            "missing asset for transaction type 3"
        );
        assert_eq!(
            CodecError::AssetMismatch(TxType::Delegate).to_string(),
            "asset does not match transaction type 2"
        );
    }

    #[test]
    fn missing_sender_keeps_legacy_wording() {
        // Capital P included; wallet tooling matches on the exact string.
        assert_eq!(
            CodecError::MissingSenderPublicKey.to_string(),
            "Please set sender publicKey"
        );
    }
}
