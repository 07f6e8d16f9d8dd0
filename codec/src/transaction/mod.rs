//! Transaction pipeline: request → canonical form → bytes → signatures →
//! postable JSON.
//!
//! The submodules are layered and each one only reaches downward:
//!
//! - [`transform`] turns a [`TxRequest`](transform::TxRequest) into the
//!   canonical [`Transaction`](types::Transaction);
//! - [`serialize`] renders the canonical byte layout;
//! - [`signing`] hashes and signs those bytes and derives identifiers;
//! - [`address`] converts between public keys, address strings, and the
//!   8-byte wire payload;
//! - [`postable`] renders a signed transaction as node-facing JSON.

pub mod address;
pub mod postable;
pub mod serialize;
pub mod signing;
pub mod transform;
pub mod types;

pub use postable::{postable, PostableTransaction};
pub use serialize::{to_bytes, SignOptions};
pub use signing::{identifier, second_sign, sign, sign_with, verify, verify_second};
pub use transform::{transform, TxKind, TxRequest, VoteAction, VotePreference};
pub use types::{Asset, Transaction, TxType};
