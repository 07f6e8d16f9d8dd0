//! Canonical transaction types.
//!
//! [`Transaction`] is the in-memory form every other layer operates on:
//! built once by the transform step, mutated only to attach signatures,
//! then treated as immutable once an identifier has been derived. Deriving
//! an id and mutating afterwards yields a different id — don't.
//!
//! The asset payload is a tagged union, not a numeric tag plus a bag of
//! optional fields. The compiler enforces exhaustive handling; the one
//! escape hatch for forward compatibility is [`TxType::Other`].

use std::fmt;

use crate::crypto::keys::{PublicKey, Signature};

// ---------------------------------------------------------------------------
// TxType
// ---------------------------------------------------------------------------

/// The wire discriminant of a transaction.
///
/// The five known kinds map to the fixed wire values 0..=4. `Other` carries
/// any unknown wire value: transactions seen on the wire with a type this
/// implementation does not know still serialize (with an empty asset
/// segment) instead of erroring, so newer network upgrades don't brick old
/// tooling. The request layer ([`super::transform`]) is stricter and only
/// produces the five known kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxType {
    /// Balance transfer.
    Send,
    /// Second-signature registration.
    SecondSignature,
    /// Delegate registration.
    Delegate,
    /// Vote for (or against) delegates.
    Vote,
    /// Multisignature group change.
    Multisignature,
    /// Unknown on-wire type, passed through untouched.
    Other(u8),
}

impl TxType {
    /// The single-byte wire value.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Send => 0,
            Self::SecondSignature => 1,
            Self::Delegate => 2,
            Self::Vote => 3,
            Self::Multisignature => 4,
            Self::Other(value) => value,
        }
    }

    /// Maps a wire value back to a type. Unknown values land in `Other`.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Send,
            1 => Self::SecondSignature,
            2 => Self::Delegate,
            3 => Self::Vote,
            4 => Self::Multisignature,
            other => Self::Other(other),
        }
    }
}

// Display prints the wire value; error messages reference transactions by
// the number the network knows them by.
impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// The type-specific payload of a transaction.
///
/// Send transactions carry no asset at all (`Transaction::asset` is `None`).
/// Every other known type carries exactly one of these variants; a variant
/// that disagrees with the transaction type is rejected at serialization
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    /// The public key being registered as the account's second signature.
    SecondSignature { public_key: PublicKey },
    /// The delegate username being registered.
    Delegate { username: String },
    /// Ordered vote strings, each `"+"` or `"-"` followed by the hex
    /// delegate public key. An empty list is valid and encodes to an empty
    /// segment.
    Vote { votes: Vec<String> },
    /// Multisignature group parameters. `keysgroup` entries are `"+"`- or
    /// `"-"`-prefixed hex keys, additions first.
    Multisignature {
        min: u8,
        lifetime: u8,
        keysgroup: Vec<String>,
    },
}

impl Asset {
    /// The transaction type this asset belongs to.
    pub fn tx_type(&self) -> TxType {
        match self {
            Self::SecondSignature { .. } => TxType::SecondSignature,
            Self::Delegate { .. } => TxType::Delegate,
            Self::Vote { .. } => TxType::Vote,
            Self::Multisignature { .. } => TxType::Multisignature,
        }
    }
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// The canonical in-memory transaction.
///
/// Field order deliberately mirrors the byte layout (see
/// [`super::serialize`]). The identifier is never stored: it is a pure
/// function of the fully signed bytes and is derived on demand by
/// [`super::signing::identifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Wire type.
    pub tx_type: TxType,
    /// Whole seconds since the network epoch (not the Unix epoch).
    pub timestamp: u32,
    /// The sender's public key. Mandatory — serialization hard-errors
    /// upstream rather than zero-filling this field.
    pub sender_public_key: PublicKey,
    /// "On behalf of" sender for multisignature accounts.
    pub requester_public_key: Option<PublicKey>,
    /// Recipient address (`<digits>L`); absent for non-transfer types
    /// except votes, which are self-addressed.
    pub recipient_id: Option<String>,
    /// Amount in the smallest currency unit. Zero for non-transfers.
    pub amount: u64,
    /// Fee in the smallest currency unit.
    pub fee: u64,
    /// Type-specific payload; `None` for send and unknown wire types.
    pub asset: Option<Asset>,
    /// Primary (sender) signature.
    pub signature: Option<Signature>,
    /// Second signature, when the account has one registered.
    pub sign_signature: Option<Signature>,
    /// Multisignature co-signer signatures.
    pub signatures: Option<Vec<Signature>>,
}

impl Transaction {
    /// Whether a primary signature is attached.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }
}
