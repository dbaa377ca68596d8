// RSA Decryption
// The private exponent is applied directly to the cipher integer (no CRT)

use super::bigint::RsaBigInt;
use super::codec::{bytes_to_int, int_to_bytes};
use super::keygen::{RsaPrivateKey, RsaPublicKey};
use super::primitive::rsa_primitive;
use crate::error::Result;

/// Decrypt with our own private key: `c^d mod n`.
pub fn decrypt_with_private(ciphertext: &RsaBigInt, private_key: &RsaPrivateKey) -> RsaBigInt {
    rsa_primitive(ciphertext, &private_key.d, &private_key.n)
}

/// "Decrypt" with the signer's public key, i.e. raw verification: `s^e mod n`.
/// The result equals the signed message when the signature is genuine.
pub fn decrypt_with_public(ciphertext: &RsaBigInt, public_key: &RsaPublicKey) -> RsaBigInt {
    rsa_primitive(ciphertext, &public_key.e, &public_key.n)
}

/// Decrypt ciphertext bytes using RSA private key
/// Leading zero bytes of the original plaintext do not survive.
pub fn decrypt_bytes(ciphertext: &[u8], private_key: &RsaPrivateKey) -> Vec<u8> {
    let c = bytes_to_int(ciphertext);
    int_to_bytes(&decrypt_with_private(&c, private_key))
}

/// Decrypt raw signature bytes with the public key
pub fn decrypt_bytes_with_public(ciphertext: &[u8], public_key: &RsaPublicKey) -> Vec<u8> {
    let c = bytes_to_int(ciphertext);
    int_to_bytes(&decrypt_with_public(&c, public_key))
}

/// Decrypt ciphertext to a string
pub fn decrypt_to_string(ciphertext: &[u8], private_key: &RsaPrivateKey) -> Result<String> {
    let plaintext = decrypt_bytes(ciphertext, private_key);
    Ok(String::from_utf8(plaintext)?)
}
