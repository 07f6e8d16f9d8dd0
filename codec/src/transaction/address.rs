//! Account addresses.
//!
//! An address is the decimal rendering of an unsigned 64-bit integer plus a
//! single trailing letter (`'L'` on mainnet). The integer comes from the
//! first 8 bytes of `SHA-256(public key)`, read in reversed order. The
//! trailing letter carries no information: decoding strips it, derivation
//! re-appends it.

use crate::bytes::reversed_prefix_u64;
use crate::config::NetworkParams;
use crate::crypto::hash::sha256;
use crate::crypto::keys::PublicKey;
use crate::error::CodecError;

/// Decodes an address string into its fixed 8-byte big-endian payload.
///
/// The trailing letter is stripped; the remaining decimal digits must parse
/// as an unsigned 64-bit integer. A numeric value past 8 bytes is a hard
/// error ([`CodecError::AddressOverflow`]), as is anything that isn't
/// digits-then-one-letter.
pub fn address_bytes(address: &str) -> Result<[u8; 8], CodecError> {
    let invalid = || CodecError::InvalidAddress(address.to_string());

    let suffix = address.chars().last().ok_or_else(invalid)?;
    if !suffix.is_ascii_alphabetic() {
        return Err(invalid());
    }

    let digits = &address[..address.len() - 1];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let numeric: u64 = digits
        .parse()
        .map_err(|_| CodecError::AddressOverflow(address.to_string()))?;
    Ok(numeric.to_be_bytes())
}

/// Derives the account address for a public key.
///
/// `SHA-256(pk)`, first 8 digest bytes reversed, decimal-encoded, suffix
/// appended. The byte reversal is part of the network contract — see
/// [`reversed_prefix_u64`].
pub fn from_public_key(public_key: &PublicKey, params: &NetworkParams) -> String {
    let digest = sha256(public_key.as_bytes());
    let numeric = reversed_prefix_u64(&digest);
    format!("{}{}", numeric, params.address_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::Keypair;

    #[test]
    fn derives_reference_address() {
        let kp = Keypair::from_passphrase(
            "wagon stock borrow episode laundry kitten salute link globe zero feed marble",
        );
        let address = from_public_key(&kp.public_key(), &NetworkParams::mainnet());
        assert_eq!(address, "16313739661670634666L");
    }

    #[test]
    fn derived_addresses_are_digits_plus_suffix() {
        let params = NetworkParams::mainnet();
        for secret in ["a", "b", "c", "delegate genesis"] {
            let address = from_public_key(&Keypair::from_passphrase(secret).public_key(), &params);
            assert!(address.ends_with('L'));
            assert!(address[..address.len() - 1]
                .bytes()
                .all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn decodes_to_big_endian_payload() {
        assert_eq!(
            address_bytes("123456789L").unwrap(),
            123_456_789u64.to_be_bytes()
        );
        assert_eq!(address_bytes("0L").unwrap(), [0u8; 8]);
        // u64::MAX fits exactly.
        assert_eq!(
            address_bytes("18446744073709551615L").unwrap(),
            [0xFF; 8]
        );
    }

    #[test]
    fn derivation_and_decoding_agree() {
        let params = NetworkParams::mainnet();
        let kp = Keypair::from_passphrase("roundtrip account");
        let address = from_public_key(&kp.public_key(), &params);

        let digest = sha256(kp.public_key().as_bytes());
        let expected = reversed_prefix_u64(&digest).to_be_bytes();
        assert_eq!(address_bytes(&address).unwrap(), expected);
    }

    #[test]
    fn rejects_overflow_past_8_bytes() {
        // u64::MAX + 1.
        assert_eq!(
            address_bytes("18446744073709551616L"),
            Err(CodecError::AddressOverflow(
                "18446744073709551616L".to_string()
            ))
        );
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "L", "12345", "12a45L", "123456789!"] {
            assert_eq!(
                address_bytes(bad),
                Err(CodecError::InvalidAddress(bad.to_string())),
                "expected {:?} to be rejected",
                bad
            );
        }
    }
}
