// Copyright (c) 2026 lisk-codec contributors. MIT License.
// See LICENSE for details.

//! # Lisk Transaction Codec
//!
//! A deterministic codec for Lisk-style DPoS transactions: it turns a typed,
//! in-memory transaction into its canonical byte sequence, derives the
//! transaction identifier, signs it with Ed25519 and produces the postable
//! (JSON-safe) wire form.
//!
//! The byte encoding is the interoperability contract of the network, not an
//! implementation detail. Wallets, nodes and explorers must all reproduce the
//! exact same bytes for the same logical transaction, or signatures and ids
//! diverge and nothing works. Every function in this crate is written with
//! that in mind: bounded, synchronous, deterministic, no I/O.
//!
//! ## Architecture
//!
//! - **config** — Network parameters: epoch instant, base-fee table,
//!   address suffix, signed-message prefix.
//! - **crypto** — Ed25519 keypairs and SHA-256 hashing. Thin wrappers over
//!   ed25519-dalek and sha2; don't roll your own.
//! - **bytes** — Low-level byte primitives (varint writer, reversed-digest
//!   helpers) shared by the address, identifier and message layers.
//! - **transaction** — The core: canonical types, byte serialization,
//!   signing, identifier derivation, request transform, postable encoding.
//! - **message** — Arbitrary-message signing with its own framed payload,
//!   distinct from the transaction byte layout.
//!
//! ## Control flow
//!
//! ```text
//! request -> transform -> bytes (unsigned) -> sign -> bytes (signed)
//!         -> identifier -> postable
//! ```
//!
//! ## Design Philosophy
//!
//! 1. Byte-for-byte fidelity with the reference network beats elegance.
//! 2. Sum types over runtime tag dispatch — the compiler checks exhaustion.
//! 3. Optional fields are `Option`, serialized by omission, never as null.
//! 4. If it feeds a hash or a signature, it has a byte-exact test vector.

pub mod bytes;
pub mod config;
pub mod crypto;
pub mod error;
pub mod message;
pub mod transaction;

pub use config::NetworkParams;
pub use error::CodecError;
