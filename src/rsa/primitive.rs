// RSA Primitive
// The single operation behind encryption, decryption, signing and verification

use log::warn;

use super::bigint::{mod_pow, RsaBigInt};

/// Compute `input^exponent mod modulus`.
///
/// Which exponent and whose modulus are passed is the only thing that
/// distinguishes the four directions; see [`super::encrypt`] and
/// [`super::decrypt`].
///
/// No domain check is performed. An `input >= modulus` is reduced modulo
/// `modulus` and the information above it is gone; this is logged, never
/// rejected.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn rsa_primitive(input: &RsaBigInt, exponent: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if input >= modulus {
        warn!(
            "RSA input ({} bits) is not below the modulus ({} bits); it wraps modulo n",
            input.bits(),
            modulus.bits()
        );
    }

    mod_pow(input, exponent, modulus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;

    #[test]
    fn test_textbook_values() {
        let n = from_u64(3233);
        let c = rsa_primitive(&from_u64(65), &from_u64(17), &n);
        assert_eq!(c, from_u64(2790));
        assert_eq!(rsa_primitive(&c, &from_u64(2753), &n), from_u64(65));
    }

    #[test]
    fn test_input_above_modulus_wraps() {
        let n = from_u64(3233);
        let m = from_u64(3233 + 65);
        let c = rsa_primitive(&m, &from_u64(17), &n);
        assert_eq!(c, from_u64(2790));
    }
}
