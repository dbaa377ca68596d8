// RSA Encryption
// Textbook RSA: the message integer is raised to an exponent, no padding

use super::bigint::RsaBigInt;
use super::codec::{bytes_to_int, int_to_bytes};
use super::keygen::{RsaPrivateKey, RsaPublicKey};
use super::primitive::rsa_primitive;

/// Encrypt with the recipient's public key: `m^e mod n`.
/// `message` should be below `n`; larger values wrap.
pub fn encrypt_with_public(message: &RsaBigInt, public_key: &RsaPublicKey) -> RsaBigInt {
    rsa_primitive(message, &public_key.e, &public_key.n)
}

/// "Encrypt" with our own private key, i.e. a raw signature: `m^d mod n`.
pub fn encrypt_with_private(message: &RsaBigInt, private_key: &RsaPrivateKey) -> RsaBigInt {
    rsa_primitive(message, &private_key.d, &private_key.n)
}

/// Encrypt bytes using RSA public key
/// Returns the minimal big-endian encoding of the cipher integer
pub fn encrypt_bytes(plaintext: &[u8], public_key: &RsaPublicKey) -> Vec<u8> {
    let m = bytes_to_int(plaintext);
    int_to_bytes(&encrypt_with_public(&m, public_key))
}

/// Encrypt bytes with the private key (raw signature bytes)
pub fn encrypt_bytes_with_private(plaintext: &[u8], private_key: &RsaPrivateKey) -> Vec<u8> {
    let m = bytes_to_int(plaintext);
    int_to_bytes(&encrypt_with_private(&m, private_key))
}

/// Encrypt a string using RSA public key
pub fn encrypt_string(plaintext: &str, public_key: &RsaPublicKey) -> Vec<u8> {
    encrypt_bytes(plaintext.as_bytes(), public_key)
}
