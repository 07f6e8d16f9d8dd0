//! Node-facing JSON form.
//!
//! A [`PostableTransaction`] is the shape a network node accepts over its
//! HTTP API: hex strings for keys and signatures, camelCase field names,
//! decimal strings for amounts (JSON numbers lose precision past 2^53, and
//! balances get there). Optional fields are omitted from the JSON entirely
//! rather than serialized as `null` — nodes treat the two differently.
//!
//! Only fully signed transactions convert: the postable form always carries
//! a primary signature and a freshly derived identifier.

use serde::{Deserialize, Serialize};

use super::signing;
use super::types::{Asset, Transaction};
use crate::error::CodecError;

/// The JSON asset payload, one shape per known transaction type.
///
/// Send transactions omit the asset field entirely; unknown wire types have
/// nothing to render and omit it as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostableAsset {
    /// `{"signature": {"publicKey": "<hex>"}}`
    SecondSignature { signature: SecondSignatureKey },
    /// `{"delegate": {"username": "<name>"}}`
    Delegate { delegate: DelegateName },
    /// `{"votes": ["+<hex>", "-<hex>", ...]}`
    Vote { votes: Vec<String> },
    /// `{"multisignature": {"min": n, "lifetime": n, "keysgroup": [...]}}`
    Multisignature { multisignature: MultisignatureGroup },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondSignatureKey {
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateName {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisignatureGroup {
    pub min: u8,
    pub lifetime: u8,
    pub keysgroup: Vec<String>,
}

/// A signed transaction in the JSON shape nodes accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostableTransaction {
    #[serde(rename = "type")]
    pub tx_type: u8,
    pub timestamp: u32,
    pub sender_public_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    pub amount: String,
    pub fee: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<PostableAsset>,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<String>>,
    pub id: String,
}

fn postable_asset(asset: &Asset) -> PostableAsset {
    match asset {
        Asset::SecondSignature { public_key } => PostableAsset::SecondSignature {
            signature: SecondSignatureKey {
                public_key: public_key.to_hex(),
            },
        },
        Asset::Delegate { username } => PostableAsset::Delegate {
            delegate: DelegateName {
                username: username.clone(),
            },
        },
        Asset::Vote { votes } => PostableAsset::Vote {
            votes: votes.clone(),
        },
        Asset::Multisignature {
            min,
            lifetime,
            keysgroup,
        } => PostableAsset::Multisignature {
            multisignature: MultisignatureGroup {
                min: *min,
                lifetime: *lifetime,
                keysgroup: keysgroup.clone(),
            },
        },
    }
}

/// Converts a signed transaction into its postable form.
///
/// Fails with [`CodecError::MissingSignature`] for unsigned transactions.
/// The identifier is derived fresh from the current field values, so the
/// output is consistent even if the caller mutated the transaction since an
/// earlier derivation.
pub fn postable(tx: &Transaction) -> Result<PostableTransaction, CodecError> {
    let signature = tx.signature.ok_or(CodecError::MissingSignature)?;
    let id = signing::identifier(tx)?;

    Ok(PostableTransaction {
        tx_type: tx.tx_type.as_u8(),
        timestamp: tx.timestamp,
        sender_public_key: tx.sender_public_key.to_hex(),
        requester_public_key: tx.requester_public_key.map(|pk| pk.to_hex()),
        recipient_id: tx.recipient_id.clone(),
        amount: tx.amount.to_string(),
        fee: tx.fee.to_string(),
        asset: tx.asset.as_ref().map(postable_asset),
        signature: signature.to_hex(),
        sign_signature: tx.sign_signature.map(|sig| sig.to_hex()),
        signatures: tx
            .signatures
            .as_ref()
            .map(|sigs| sigs.iter().map(|sig| sig.to_hex()).collect()),
        id,
    })
}
