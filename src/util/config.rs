// Configuration for the console demo
// Everything the flow needs is passed in here; nothing is process-wide

use std::path::PathBuf;

use crate::rsa::keygen::DEFAULT_PUBLIC_EXPONENT;

/// Key sizes the reference flow walks through
pub const DEFAULT_KEY_SIZES: [u32; 4] = [1024, 2048, 3072, 4096];

/// Which pair of operations the demo runs on the plaintext
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Direction {
    /// Encrypt with the private key, decrypt with the public key
    #[default]
    Sign,
    /// Encrypt with the public key, decrypt with the private key
    Encrypt,
}

/// Configuration for one run of the demo
#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub key_sizes: Vec<u32>,
    pub public_exponent: u64,
    /// Plaintext to use instead of prompting for one
    pub message: Option<String>,
    pub direction: Direction,
    /// PEM private key to use instead of the last generated key
    pub key_file: Option<PathBuf>,
    /// Directory that receives the generated keys as PEM files
    pub out_dir: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            key_sizes: DEFAULT_KEY_SIZES.to_vec(),
            public_exponent: DEFAULT_PUBLIC_EXPONENT,
            message: None,
            direction: Direction::default(),
            key_file: None,
            out_dir: None,
        }
    }
}

impl DemoConfig {
    pub fn with_key_sizes(mut self, key_sizes: Vec<u32>) -> Self {
        self.key_sizes = key_sizes;
        self
    }

    pub fn with_public_exponent(mut self, public_exponent: u64) -> Self {
        self.public_exponent = public_exponent;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_key_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.key_file = Some(path.into());
        self
    }

    pub fn with_out_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(path.into());
        self
    }
}
