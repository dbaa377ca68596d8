// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod codec;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod pem;
pub mod primitive;

pub use bigint::{mod_pow, RsaBigInt};
pub use codec::{bytes_to_int, int_to_bytes};
pub use decrypt::{
    decrypt_bytes, decrypt_bytes_with_public, decrypt_to_string, decrypt_with_private,
    decrypt_with_public,
};
pub use encrypt::{
    encrypt_bytes, encrypt_bytes_with_private, encrypt_string, encrypt_with_private,
    encrypt_with_public,
};
pub use keygen::{generate_keypair, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use pem::{
    decode_private_key_pem, decode_public_key_pem, encode_private_key_pem, encode_public_key_pem,
};
pub use primitive::rsa_primitive;
