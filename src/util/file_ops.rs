// File Operations for RSA keys
// Handles reading and writing PEM key files

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::rsa::keygen::{RsaKeyPair, RsaPrivateKey};
use crate::rsa::pem::{decode_private_key_pem, encode_private_key_pem, encode_public_key_pem};

/// Read entire file into memory as text
pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write data to file
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    Ok(())
}

/// Load a PKCS#1 `RSA PRIVATE KEY` PEM file
pub fn load_private_key(path: &Path) -> Result<RsaPrivateKey> {
    debug!("loading private key from {}", path.display());
    decode_private_key_pem(&read_file(path)?)
}

/// Write `rsa_<bits>.pem` and `rsa_<bits>.pub.pem` into `dir`, creating it
/// if needed. Returns the two paths.
pub fn save_keypair(dir: &Path, keypair: &RsaKeyPair) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)?;

    let private_path = dir.join(format!("rsa_{}.pem", keypair.bit_length));
    let public_path = dir.join(format!("rsa_{}.pub.pem", keypair.bit_length));

    write_file(
        &private_path,
        encode_private_key_pem(&keypair.private_key)?.as_bytes(),
    )?;
    write_file(
        &public_path,
        encode_public_key_pem(&keypair.public_key)?.as_bytes(),
    )?;

    debug!(
        "saved key pair to {} and {}",
        private_path.display(),
        public_path.display()
    );
    Ok((private_path, public_path))
}
