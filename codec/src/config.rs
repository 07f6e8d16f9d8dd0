//! # Network Parameters & Constants
//!
//! Every magic number of the network lives here. The epoch instant, the
//! base-fee table and the address suffix are consensus-critical: change any
//! of them and every signature and identifier on the network stops matching.
//!
//! The constants are hoisted into [`NetworkParams`] so that sibling networks
//! with different parameters (a testnet with its own epoch, a fork with a
//! different fee schedule) can be supported without touching codec code —
//! construct a different `NetworkParams` and pass it in.

use crate::transaction::transform::TxKind;

// ---------------------------------------------------------------------------
// Mainnet constants
// ---------------------------------------------------------------------------

/// The network epoch: 2016-05-24T17:00:00Z as a Unix timestamp. Transaction
/// timestamps count whole seconds from this instant, not from the Unix epoch.
pub const EPOCH_TIMESTAMP: i64 = 1_464_109_200;

/// Trailing letter appended to every derived address. Carries no
/// information; decoding strips it, derivation re-appends it.
pub const ADDRESS_SUFFIX: char = 'L';

/// ASCII prefix mixed into the signed-message framing (§ message module).
/// The trailing newline is part of the prefix.
pub const MESSAGE_PREFIX: &str = "Lisk Signed Message:\n";

/// Base fee for a balance transfer, in the smallest currency unit (beddows).
pub const BASE_FEE_SEND: u64 = 10_000_000;

/// Base fee for registering a second signature.
pub const BASE_FEE_SECOND_SIGNATURE: u64 = 500_000_000;

/// Base fee for registering a delegate. Deliberately steep.
pub const BASE_FEE_DELEGATE: u64 = 2_500_000_000;

/// Base fee for a vote transaction.
pub const BASE_FEE_VOTE: u64 = 100_000_000;

/// Base fee for a multisignature group change.
pub const BASE_FEE_MULTISIGNATURE: u64 = 500_000_000;

// ---------------------------------------------------------------------------
// NetworkParams
// ---------------------------------------------------------------------------

/// Default fee charged per transaction kind when the request does not carry
/// an explicit fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseFees {
    pub send: u64,
    pub second_signature: u64,
    pub delegate: u64,
    pub vote: u64,
    pub multisignature: u64,
}

/// The parameters that define one concrete network.
///
/// All codec operations that depend on network identity (nonce generation,
/// address derivation, fee defaulting, message framing) take these as an
/// explicit argument instead of reaching for globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    /// Unix timestamp of the network epoch.
    pub epoch_timestamp: i64,
    /// Per-kind default fees.
    pub base_fees: BaseFees,
    /// Trailing letter of derived addresses.
    pub address_suffix: char,
    /// Prefix of the signed-message framing.
    pub message_prefix: String,
}

impl NetworkParams {
    /// The Lisk mainnet parameters.
    pub fn mainnet() -> Self {
        Self {
            epoch_timestamp: EPOCH_TIMESTAMP,
            base_fees: BaseFees {
                send: BASE_FEE_SEND,
                second_signature: BASE_FEE_SECOND_SIGNATURE,
                delegate: BASE_FEE_DELEGATE,
                vote: BASE_FEE_VOTE,
                multisignature: BASE_FEE_MULTISIGNATURE,
            },
            address_suffix: ADDRESS_SUFFIX,
            message_prefix: MESSAGE_PREFIX.to_string(),
        }
    }

    /// Returns the default fee for a request kind.
    pub fn base_fee(&self, kind: &TxKind) -> u64 {
        match kind {
            TxKind::Send { .. } => self.base_fees.send,
            TxKind::SecondSignature { .. } => self.base_fees.second_signature,
            TxKind::RegisterDelegate { .. } => self.base_fees.delegate,
            TxKind::Vote { .. } => self.base_fees.vote,
            TxKind::Multisignature { .. } => self.base_fees.multisignature,
        }
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self::mainnet()
    }
}
