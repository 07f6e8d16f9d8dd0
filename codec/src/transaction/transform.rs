//! Request transform: human intent to canonical transaction.
//!
//! A [`TxRequest`] describes what an account wants to do ("send this much
//! there", "vote for these delegates"); [`transform`] turns it into the
//! canonical [`Transaction`] the byte layer understands. The mapping from
//! kind to wire type is an explicit match — every kind, including the
//! registration ones, has its own rule. Because [`TxKind`] is a closed
//! enum, an unsupported kind is unrepresentable rather than a runtime
//! error.
//!
//! This layer is the strict one: a missing sender public key is a hard
//! error here, while the byte layer below stays permissive about unknown
//! wire types.

use chrono::Utc;
use tracing::debug;

use super::address;
use super::types::{Asset, Transaction, TxType};
use crate::config::NetworkParams;
use crate::crypto::keys::PublicKey;
use crate::error::CodecError;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Whether a vote preference adds or removes a delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    Add,
    Remove,
}

impl VoteAction {
    /// The single-character prefix used in vote strings and keysgroups.
    pub fn prefix(self) -> char {
        match self {
            Self::Add => '+',
            Self::Remove => '-',
        }
    }
}

/// One entry of a vote preference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotePreference {
    pub action: VoteAction,
    pub delegate: PublicKey,
}

/// The operation a request describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxKind {
    /// Transfer `amount` to `recipient`.
    Send { recipient: String, amount: u64 },
    /// Cast the given votes. The transaction is self-addressed by
    /// convention.
    Vote { preferences: Vec<VotePreference> },
    /// Register a delegate username.
    RegisterDelegate { name: String },
    /// Register a second-signature public key.
    SecondSignature { public_key: PublicKey },
    /// Change the multisignature group: additions first, then removals.
    Multisignature {
        min: u8,
        lifetime: u8,
        added: Vec<PublicKey>,
        removed: Vec<PublicKey>,
    },
}

/// A human-level transaction request.
///
/// Fee and nonce are optional; absent values fall back to the per-kind
/// base fee and a freshly generated epoch nonce. The sender public key is
/// optional only so that requests can be staged before key material is
/// around — [`transform`] requires it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxRequest {
    pub kind: TxKind,
    pub sender_public_key: Option<PublicKey>,
    pub fee: Option<u64>,
    pub nonce: Option<u32>,
}

impl TxRequest {
    /// A bare request with no sender, default fee and fresh nonce.
    pub fn new(kind: TxKind) -> Self {
        Self {
            kind,
            sender_public_key: None,
            fee: None,
            nonce: None,
        }
    }

    /// Sets the sender public key.
    pub fn sender(mut self, public_key: PublicKey) -> Self {
        self.sender_public_key = Some(public_key);
        self
    }

    /// Overrides the per-kind base fee.
    pub fn fee(mut self, fee: u64) -> Self {
        self.fee = Some(fee);
        self
    }

    /// Pins the timestamp instead of generating a fresh epoch nonce.
    pub fn nonce(mut self, nonce: u32) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Whole seconds elapsed since the network epoch.
///
/// Clamped at zero for clocks that predate the epoch; the counter is
/// unsigned on the wire.
pub fn epoch_nonce(params: &NetworkParams) -> u32 {
    let elapsed = Utc::now().timestamp() - params.epoch_timestamp;
    elapsed.max(0) as u32
}

/// Builds the canonical transaction for a request.
///
/// Per-kind rules:
/// - wire type: send=0, second-signature=1, register-delegate=2, vote=3,
///   multisignature=4;
/// - fee: the explicit request fee, else the network's base fee table;
/// - recipient: the supplied address for send, the sender's own derived
///   address for vote, absent otherwise;
/// - timestamp: the explicit nonce, else freshly generated;
/// - asset: exactly what the byte layer expects for the kind.
pub fn transform(req: &TxRequest, params: &NetworkParams) -> Result<Transaction, CodecError> {
    let sender_public_key = req
        .sender_public_key
        .ok_or(CodecError::MissingSenderPublicKey)?;

    let tx_type = match &req.kind {
        TxKind::Send { .. } => TxType::Send,
        TxKind::SecondSignature { .. } => TxType::SecondSignature,
        TxKind::RegisterDelegate { .. } => TxType::Delegate,
        TxKind::Vote { .. } => TxType::Vote,
        TxKind::Multisignature { .. } => TxType::Multisignature,
    };

    let fee = req.fee.unwrap_or_else(|| params.base_fee(&req.kind));
    let timestamp = req.nonce.unwrap_or_else(|| epoch_nonce(params));

    let recipient_id = match &req.kind {
        TxKind::Send { recipient, .. } => Some(recipient.clone()),
        TxKind::Vote { .. } => Some(address::from_public_key(&sender_public_key, params)),
        _ => None,
    };

    let amount = match &req.kind {
        TxKind::Send { amount, .. } => *amount,
        _ => 0,
    };

    let asset = match &req.kind {
        TxKind::Send { .. } => None,
        TxKind::Vote { preferences } => Some(Asset::Vote {
            votes: preferences
                .iter()
                .map(|p| format!("{}{}", p.action.prefix(), p.delegate.to_hex()))
                .collect(),
        }),
        TxKind::RegisterDelegate { name } => Some(Asset::Delegate {
            username: name.clone(),
        }),
        TxKind::SecondSignature { public_key } => Some(Asset::SecondSignature {
            public_key: *public_key,
        }),
        TxKind::Multisignature {
            min,
            lifetime,
            added,
            removed,
        } => {
            let keysgroup = added
                .iter()
                .map(|pk| format!("+{}", pk.to_hex()))
                .chain(removed.iter().map(|pk| format!("-{}", pk.to_hex())))
                .collect();
            Some(Asset::Multisignature {
                min: *min,
                lifetime: *lifetime,
                keysgroup,
            })
        }
    };

    debug!(tx_type = %tx_type, fee, timestamp, "transformed request");

    Ok(Transaction {
        tx_type,
        timestamp,
        sender_public_key,
        requester_public_key: None,
        recipient_id,
        amount,
        fee,
        asset,
        signature: None,
        sign_signature: None,
        signatures: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::Keypair;

    fn sender() -> PublicKey {
        Keypair::from_passphrase(
            "wagon stock borrow episode laundry kitten salute link globe zero feed marble",
        )
        .public_key()
    }

    fn params() -> NetworkParams {
        NetworkParams::mainnet()
    }

    fn send_request() -> TxRequest {
        TxRequest::new(TxKind::Send {
            recipient: "123456789L".into(),
            amount: 1_000_000,
        })
        .sender(sender())
        .nonce(0)
    }

    #[test]
    fn send_maps_to_type_0_with_base_fee() {
        let tx = transform(&send_request(), &params()).unwrap();
        assert_eq!(tx.tx_type, TxType::Send);
        assert_eq!(tx.fee, 10_000_000);
        assert_eq!(tx.amount, 1_000_000);
        assert_eq!(tx.recipient_id.as_deref(), Some("123456789L"));
        assert_eq!(tx.timestamp, 0);
        assert!(tx.asset.is_none());
    }

    #[test]
    fn explicit_fee_overrides_base_fee() {
        let tx = transform(&send_request().fee(42), &params()).unwrap();
        assert_eq!(tx.fee, 42);
    }

    #[test]
    fn registration_kinds_map_to_their_wire_types() {
        let p = params();

        let tx = transform(
            &TxRequest::new(TxKind::SecondSignature {
                public_key: sender(),
            })
            .sender(sender()),
            &p,
        )
        .unwrap();
        assert_eq!(tx.tx_type, TxType::SecondSignature);
        assert_eq!(tx.fee, 500_000_000);

        let tx = transform(
            &TxRequest::new(TxKind::RegisterDelegate {
                name: "genesis_1".into(),
            })
            .sender(sender()),
            &p,
        )
        .unwrap();
        assert_eq!(tx.tx_type, TxType::Delegate);
        assert_eq!(tx.fee, 2_500_000_000);
        assert_eq!(
            tx.asset,
            Some(Asset::Delegate {
                username: "genesis_1".into()
            })
        );

        let tx = transform(
            &TxRequest::new(TxKind::Multisignature {
                min: 2,
                lifetime: 24,
                added: vec![],
                removed: vec![],
            })
            .sender(sender()),
            &p,
        )
        .unwrap();
        assert_eq!(tx.tx_type, TxType::Multisignature);
        assert_eq!(tx.fee, 500_000_000);
    }

    #[test]
    fn non_transfer_kinds_have_no_recipient_and_zero_amount() {
        let tx = transform(
            &TxRequest::new(TxKind::RegisterDelegate { name: "d".into() }).sender(sender()),
            &params(),
        )
        .unwrap();
        assert!(tx.recipient_id.is_none());
        assert_eq!(tx.amount, 0);
    }

    #[test]
    fn vote_is_self_addressed() {
        let tx = transform(
            &TxRequest::new(TxKind::Vote {
                preferences: vec![],
            })
            .sender(sender()),
            &params(),
        )
        .unwrap();
        assert_eq!(tx.recipient_id.as_deref(), Some("16313739661670634666L"));
        assert_eq!(tx.fee, 100_000_000);
    }

    #[test]
    fn vote_preferences_become_prefixed_hex_strings() {
        let delegate = Keypair::from_passphrase("delegate").public_key();
        let tx = transform(
            &TxRequest::new(TxKind::Vote {
                preferences: vec![
                    VotePreference {
                        action: VoteAction::Add,
                        delegate,
                    },
                    VotePreference {
                        action: VoteAction::Remove,
                        delegate: sender(),
                    },
                ],
            })
            .sender(sender()),
            &params(),
        )
        .unwrap();

        assert_eq!(
            tx.asset,
            Some(Asset::Vote {
                votes: vec![
                    format!("+{}", delegate.to_hex()),
                    format!("-{}", sender().to_hex()),
                ]
            })
        );
    }

    #[test]
    fn multisignature_keysgroup_puts_additions_first() {
        let a = Keypair::from_passphrase("a").public_key();
        let b = Keypair::from_passphrase("b").public_key();
        let c = Keypair::from_passphrase("c").public_key();
        let tx = transform(
            &TxRequest::new(TxKind::Multisignature {
                min: 2,
                lifetime: 24,
                added: vec![a, b],
                removed: vec![c],
            })
            .sender(sender()),
            &params(),
        )
        .unwrap();

        assert_eq!(
            tx.asset,
            Some(Asset::Multisignature {
                min: 2,
                lifetime: 24,
                keysgroup: vec![
                    format!("+{}", a.to_hex()),
                    format!("+{}", b.to_hex()),
                    format!("-{}", c.to_hex()),
                ]
            })
        );
    }

    #[test]
    fn missing_sender_public_key_is_rejected() {
        let req = TxRequest::new(TxKind::Send {
            recipient: "1L".into(),
            amount: 1,
        });
        assert_eq!(
            transform(&req, &params()),
            Err(CodecError::MissingSenderPublicKey)
        );
    }

    #[test]
    fn fresh_nonce_counts_from_network_epoch() {
        let p = params();
        let before = epoch_nonce(&p);
        let tx = transform(&send_request().clone().fee(1), &p).unwrap();
        // Explicit nonce(0) pins the timestamp.
        assert_eq!(tx.timestamp, 0);

        let req = TxRequest::new(TxKind::Send {
            recipient: "1L".into(),
            amount: 1,
        })
        .sender(sender());
        let tx = transform(&req, &p).unwrap();
        let after = epoch_nonce(&p);
        assert!(tx.timestamp >= before && tx.timestamp <= after);
        // Sanity: we are years past the 2016 epoch.
        assert!(tx.timestamp > 300_000_000);
    }
}
