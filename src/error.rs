// Error types shared by the key collaborators and the console adapter.
// The RSA primitive itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("bit length must be at least {min}, got {actual}")]
    KeySizeTooSmall { min: u32, actual: u32 },

    #[error("bit length must be even (p and q have equal bit length), got {0}")]
    OddKeySize(u32),

    #[error("public exponent must be odd and at least 3, got {0}")]
    InvalidPublicExponent(u64),

    #[error("malformed key: {0}")]
    MalformedKey(String),

    #[error("missing PEM boundary: {0}")]
    MissingPemBoundary(&'static str),

    #[error("unexpected PEM label: expected {expected}, got {actual}")]
    PemLabelMismatch { expected: &'static str, actual: String },

    #[error("DER error: {0}")]
    Der(#[from] pkcs1::der::Error),

    #[error("SubjectPublicKeyInfo error: {0}")]
    Spki(#[from] spki::Error),

    #[error("unsupported key encoding: {0}")]
    UnsupportedKey(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("no key material: configure at least one key size or a key file")]
    NoKeyMaterial,
}

pub type Result<T> = std::result::Result<T, Error>;
