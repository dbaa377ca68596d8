// Integer Codec
// Bridges plaintext bytes and the integers RSA operates on

use num_traits::Zero;

use super::bigint::RsaBigInt;

/// Interpret `bytes` as a big-endian unsigned integer.
/// An empty slice is 0. Leading zero bytes carry no value and are lost.
pub fn bytes_to_int(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Minimal big-endian encoding of `value`: `ceil(bits / 8)` bytes.
///
/// Zero encodes as an empty byte string, not as `[0x00]`.
pub fn int_to_bytes(value: &RsaBigInt) -> Vec<u8> {
    if value.is_zero() {
        // BigUint::to_bytes_be gives [0] here
        return Vec::new();
    }
    value.to_bytes_be()
}
