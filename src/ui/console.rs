// Console front end for the textbook RSA demo
// Generates keys, reads a plaintext, runs it through the primitive and back

use std::io::{BufRead, Write};

use log::info;

use crate::error::{Error, Result};
use crate::rsa::codec::{bytes_to_int, int_to_bytes};
use crate::rsa::decrypt::{decrypt_with_private, decrypt_with_public};
use crate::rsa::encrypt::{encrypt_with_private, encrypt_with_public};
use crate::rsa::keygen::{generate_keypair, RsaPrivateKey};
use crate::rsa::pem::{encode_private_key_pem, encode_public_key_pem};
use crate::util::config::{DemoConfig, Direction};
use crate::util::file_ops::{load_private_key, save_keypair};

/// Render bytes as an escaped byte-string literal: `b'...'`
pub fn byte_literal(bytes: &[u8]) -> String {
    format!("b'{}'", bytes.escape_ascii())
}

fn read_plaintext<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<u8>> {
    write!(output, "\nPlaintext: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
    Ok(line.as_bytes().to_vec())
}

// Generates a key pair per configured size and reports the PEM sizes.
// Returns the private key of the last one.
fn generate_keys<W: Write>(config: &DemoConfig, output: &mut W) -> Result<Option<RsaPrivateKey>> {
    let mut last = None;

    for &key_size in &config.key_sizes {
        writeln!(output, "\nGenerating keys with key size: {} bits", key_size)?;
        let keypair = generate_keypair(key_size, config.public_exponent)?;

        let private_pem = encode_private_key_pem(&keypair.private_key)?;
        let public_pem = encode_public_key_pem(&keypair.public_key)?;
        writeln!(output, "Private key length: {} bytes", private_pem.len())?;
        writeln!(output, "Public key length: {} bytes", public_pem.len())?;

        if let Some(dir) = &config.out_dir {
            let (private_path, public_path) = save_keypair(dir, &keypair)?;
            writeln!(
                output,
                "Saved {} and {}",
                private_path.display(),
                public_path.display()
            )?;
        }

        last = Some(keypair.private_key);
    }

    Ok(last)
}

/// Run the demo: every configured key size is generated and reported, then
/// the plaintext goes through the primitive with the last key (or the key
/// file, when one is configured) and back.
pub fn run<R: BufRead, W: Write>(config: &DemoConfig, mut input: R, mut output: W) -> Result<()> {
    let mut private_key = generate_keys(config, &mut output)?;

    if let Some(path) = &config.key_file {
        let key = load_private_key(path)?;
        writeln!(
            output,
            "\nLoaded {}-bit private key from {}",
            key.bit_length(),
            path.display()
        )?;
        private_key = Some(key);
    }

    let private_key = private_key.ok_or(Error::NoKeyMaterial)?;
    let public_key = private_key.public_key();

    writeln!(
        output,
        "\nTHIS IS JUST FOR TRAINING (DO NOT USE THIS FOR REAL CRYPTOGRAPHY)"
    )?;

    let message = match &config.message {
        Some(message) => message.as_bytes().to_vec(),
        None => read_plaintext(&mut input, &mut output)?,
    };

    let message_as_int = bytes_to_int(&message);
    if message_as_int >= public_key.n {
        writeln!(
            output,
            "\nWarning: the plaintext is not below the {}-bit modulus and will not survive the round trip",
            public_key.bit_length()
        )?;
    }

    info!(
        "running {:?} round trip with a {}-bit key",
        config.direction,
        public_key.bit_length()
    );

    let (cipher_as_int, message_as_int) = match config.direction {
        Direction::Sign => {
            // Encrypt the message using the private key, decrypt with the public key
            let cipher_as_int = encrypt_with_private(&message_as_int, &private_key);
            let recovered = decrypt_with_public(&cipher_as_int, &public_key);
            (cipher_as_int, recovered)
        }
        Direction::Encrypt => {
            let cipher_as_int = encrypt_with_public(&message_as_int, &public_key);
            let recovered = decrypt_with_private(&cipher_as_int, &private_key);
            (cipher_as_int, recovered)
        }
    };

    let cipher = int_to_bytes(&cipher_as_int);
    writeln!(
        output,
        "\nThe encrypted message looks like this : {}",
        byte_literal(&cipher)
    )?;
    writeln!(output, "Hex: {}", hex::encode(&cipher))?;

    let message = int_to_bytes(&message_as_int);
    writeln!(output, "\nDecrypted message: {}\n", byte_literal(&message))?;

    Ok(())
}
