//! Textbook RSA: encryption, decryption, raw signing and raw verification as
//! modular exponentiation over arbitrary-precision integers, with no padding.
//!
//! THIS IS JUST FOR TRAINING. Unpadded RSA is deterministic and malleable,
//! and nothing here is constant time.
//!
//! ```
//! use textbook_rsa::rsa::{bigint::from_u64, decrypt_with_private, encrypt_with_public, RsaPrivateKey};
//!
//! let key = RsaPrivateKey::new(
//!     from_u64(3233),
//!     from_u64(17),
//!     from_u64(2753),
//!     from_u64(61),
//!     from_u64(53),
//! )
//! .unwrap();
//!
//! let c = encrypt_with_public(&from_u64(65), &key.public_key());
//! assert_eq!(c, from_u64(2790));
//! assert_eq!(decrypt_with_private(&c, &key), from_u64(65));
//! ```

pub mod error;
pub mod rsa;
pub mod ui;
pub mod util;

pub use error::{Error, Result};
