// RSA Key Generation
// Key material types and the key pair generator

use log::debug;
use num_traits::{One, Zero};

use super::bigint::{from_u64, gcd, lcm, mod_inverse, random_prime, RsaBigInt};
use crate::error::{Error, Result};

/// Smallest modulus `generate_keypair` accepts
pub const MIN_KEY_BITS: u32 = 512;

/// Public exponent used unless told otherwise
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

/// RSA Private Key
///
/// Holds the whole key material: `n`, `e` and `d` are all the primitive
/// needs, the remaining fields exist for PKCS#1 serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt, // Modulus (same as public)
    pub e: RsaBigInt, // Public exponent
    pub d: RsaBigInt, // Private exponent
    pub p: RsaBigInt, // First prime factor
    pub q: RsaBigInt, // Second prime factor
    pub d_p: RsaBigInt,   // d mod (p-1)
    pub d_q: RsaBigInt,   // d mod (q-1)
    pub q_inv: RsaBigInt, // q^(-1) mod p
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    pub bit_length: u32,
}

fn malformed(reason: &str) -> Error {
    Error::MalformedKey(reason.to_string())
}

fn check_public_components(n: &RsaBigInt, e: &RsaBigInt) -> Result<()> {
    if n.is_zero() {
        return Err(malformed("modulus is zero"));
    }
    if e.is_zero() || e >= n {
        return Err(malformed("public exponent is not in (0, n)"));
    }
    Ok(())
}

impl RsaPublicKey {
    pub fn new(n: RsaBigInt, e: RsaBigInt) -> Result<Self> {
        check_public_components(&n, &e)?;
        Ok(Self { n, e })
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u32 {
        u32::try_from(self.n.bits()).unwrap_or(u32::MAX)
    }

    /// Encrypt plaintext bytes with this public key (no padding)
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        super::encrypt::encrypt_bytes(plaintext, self)
    }

    /// Recover the message from a raw signature made with the matching
    /// private key
    pub fn verify(&self, signature: &[u8]) -> Vec<u8> {
        super::decrypt::decrypt_bytes_with_public(signature, self)
    }
}

impl RsaPrivateKey {
    /// Build a private key from its defining components, deriving the CRT
    /// values. Fails unless `n = p*q`, `e` and `d` lie in `(0, n)` and
    /// `e*d ≡ 1 (mod λ(n))`.
    pub fn new(
        n: RsaBigInt,
        e: RsaBigInt,
        d: RsaBigInt,
        p: RsaBigInt,
        q: RsaBigInt,
    ) -> Result<Self> {
        check_public_components(&n, &e)?;
        if d.is_zero() || d >= n {
            return Err(malformed("private exponent is not in (0, n)"));
        }
        if p <= RsaBigInt::one() || q <= RsaBigInt::one() || &p * &q != n {
            return Err(malformed("n is not the product of p and q"));
        }

        let p_minus_1 = &p - 1u8;
        let q_minus_1 = &q - 1u8;
        let lambda_n = lcm(&p_minus_1, &q_minus_1);
        if !((&e * &d) % &lambda_n).is_one() {
            return Err(malformed("e * d is not 1 modulo lambda(n)"));
        }

        let q_inv = mod_inverse(&q, &p).ok_or_else(|| malformed("q has no inverse modulo p"))?;
        let d_p = &d % &p_minus_1;
        let d_q = &d % &q_minus_1;

        Ok(Self {
            n,
            e,
            d,
            p,
            q,
            d_p,
            d_q,
            q_inv,
        })
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u32 {
        u32::try_from(self.n.bits()).unwrap_or(u32::MAX)
    }

    /// The public half of this key
    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            n: self.n.clone(),
            e: self.e.clone(),
        }
    }

    /// Decrypt ciphertext bytes with this private key (no padding)
    pub fn decrypt(&self, ciphertext: &[u8]) -> Vec<u8> {
        super::decrypt::decrypt_bytes(ciphertext, self)
    }

    /// Raw signature: the message bytes raised to `d` modulo `n`
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        super::encrypt::encrypt_bytes_with_private(message, self)
    }
}

impl RsaKeyPair {
    /// Get the bit length of the key
    pub fn bit_length(&self) -> u32 {
        self.public_key.bit_length()
    }
}

// Draw primes until p - 1 is coprime to e, otherwise d does not exist
fn prime_for_exponent(bit_length: u32, e: &RsaBigInt) -> RsaBigInt {
    loop {
        let p = random_prime(bit_length);
        if gcd(e, &(&p - 1u8)).is_one() {
            return p;
        }
    }
}

/// Generate RSA key pair with specified bit length
/// bit_length: Size of the modulus in bits (1024, 2048, 3072, 4096, etc.)
/// e: Public exponent (common values: 3, 17, 65537)
///
/// The private exponent is `e^-1 mod λ(n)` with `λ(n) = lcm(p-1, q-1)`.
pub fn generate_keypair(bit_length: u32, e: u64) -> Result<RsaKeyPair> {
    if bit_length < MIN_KEY_BITS {
        return Err(Error::KeySizeTooSmall {
            min: MIN_KEY_BITS,
            actual: bit_length,
        });
    }
    if bit_length % 2 != 0 {
        return Err(Error::OddKeySize(bit_length));
    }
    if e < 3 || e % 2 == 0 {
        return Err(Error::InvalidPublicExponent(e));
    }

    debug!("generating {}-bit RSA key pair with e = {}", bit_length, e);

    let e = from_u64(e);
    let half_bits = bit_length / 2;

    // Step 1: Generate two distinct primes p and q
    let p = prime_for_exponent(half_bits, &e);
    let q = loop {
        let q = prime_for_exponent(half_bits, &e);
        if q != p {
            break q;
        }
    };

    // Ensure p > q (for q_inv calculation)
    let (p, q) = if p < q { (q, p) } else { (p, q) };

    // Step 2: Compute n = p * q
    let n = &p * &q;

    // Step 3: d = e^(-1) mod λ(n)
    let lambda_n = lcm(&(&p - 1u8), &(&q - 1u8));
    let d = mod_inverse(&e, &lambda_n)
        .ok_or_else(|| malformed("public exponent has no inverse modulo lambda(n)"))?;

    let private_key = RsaPrivateKey::new(n, e, d, p, q)?;
    let public_key = private_key.public_key();

    debug!("generated {}-bit modulus", public_key.bit_length());

    Ok(RsaKeyPair {
        public_key,
        private_key,
        bit_length,
    })
}

/// The p = 61, q = 53 key from the textbook: n = 3233, e = 17, d = 2753
#[cfg(test)]
pub(crate) fn textbook_key() -> RsaPrivateKey {
    RsaPrivateKey::new(
        from_u64(3233),
        from_u64(17),
        from_u64(2753),
        from_u64(61),
        from_u64(53),
    )
    .unwrap()
}
