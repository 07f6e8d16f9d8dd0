//! Low-level byte primitives shared by the codec layers.
//!
//! Two things live here: the CompactSize varint writer used by the
//! signed-message framing, and the reversed-digest helper that both address
//! and identifier derivation depend on. Multi-byte integers inside the
//! transaction layout itself are written inline with `to_le_bytes`.

/// Appends the CompactSize encoding of `n` to `buf`.
///
/// This is the Bitcoin-style variable-length unsigned integer: values below
/// `0xfd` are a single byte; larger values get a one-byte marker followed by
/// a little-endian 2-, 4- or 8-byte integer. It is what the reference
/// network uses for the signed-message length prefixes.
pub fn write_varint(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Returns the CompactSize encoding of `n` as a fresh buffer.
pub fn varint(n: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(9);
    write_varint(&mut buf, n);
    buf
}

/// Interprets the first 8 bytes of a digest in reversed order as an
/// unsigned big-endian integer.
///
/// Both address and identifier derivation take the leading 8 bytes of a
/// SHA-256 digest and reverse them (byte `i` comes from digest byte `7-i`)
/// before the big-integer interpretation. The reversal is required for
/// bit-exact compatibility with the reference network; every independent
/// implementation performs it the same way.
///
/// # Panics
///
/// Panics if the digest is shorter than 8 bytes. All call sites feed a
/// 32-byte SHA-256 output.
pub fn reversed_prefix_u64(digest: &[u8]) -> u64 {
    let mut tail = [0u8; 8];
    for (i, byte) in tail.iter_mut().enumerate() {
        *byte = digest[7 - i];
    }
    u64::from_be_bytes(tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varint_single_byte() {
        assert_eq!(varint(0), vec![0x00]);
        assert_eq!(varint(21), vec![0x15]); // the message-prefix length
        assert_eq!(varint(0xfc), vec![0xfc]);
    }

    #[test]
    fn varint_two_byte_marker() {
        assert_eq!(varint(0xfd), vec![0xfd, 0xfd, 0x00]);
        assert_eq!(varint(0xffff), vec![0xfd, 0xff, 0xff]);
    }

    #[test]
    fn varint_four_byte_marker() {
        assert_eq!(varint(0x1_0000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(
            varint(0xffff_ffff),
            vec![0xfe, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn varint_eight_byte_marker() {
        assert_eq!(
            varint(0x1_0000_0000),
            vec![0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn reversed_prefix_reads_bytes_backwards() {
        let digest: Vec<u8> = (0u8..32).collect();
        // Bytes 7..=0 reversed: 0x07060504030201 00.
        assert_eq!(
            reversed_prefix_u64(&digest),
            u64::from_be_bytes([7, 6, 5, 4, 3, 2, 1, 0])
        );
    }

    #[test]
    fn reversed_prefix_ignores_digest_tail() {
        let mut a = vec![0xAB; 32];
        let mut b = vec![0xAB; 32];
        a[31] = 0x00;
        b[31] = 0xFF;
        assert_eq!(reversed_prefix_u64(&a), reversed_prefix_u64(&b));
    }
}
