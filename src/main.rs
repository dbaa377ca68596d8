use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use textbook_rsa::rsa::keygen::DEFAULT_PUBLIC_EXPONENT;
use textbook_rsa::util::config::{DemoConfig, Direction, DEFAULT_KEY_SIZES};

#[derive(Parser)]
#[command(name = "textbook-rsa")]
#[command(about = "Textbook (unpadded) RSA demo - for training only", long_about = None)]
struct Cli {
    /// Modulus sizes to generate key pairs for, in bits
    #[arg(long = "key-size", value_delimiter = ',', default_values_t = DEFAULT_KEY_SIZES)]
    key_sizes: Vec<u32>,

    /// Public exponent used for every generated key
    #[arg(long, default_value_t = DEFAULT_PUBLIC_EXPONENT)]
    public_exponent: u64,

    /// Plaintext to process. If not specified, reads one line from stdin
    #[arg(short, long)]
    message: Option<String>,

    /// Which key encrypts and which decrypts
    #[arg(short, long, value_enum, default_value_t = Direction::Sign)]
    direction: Direction,

    /// PEM private key (RSA PRIVATE KEY) to use instead of the last generated key
    #[arg(short, long)]
    key: Option<PathBuf>,

    /// Directory to write the generated key pairs to as PEM files
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

impl From<Cli> for DemoConfig {
    fn from(cli: Cli) -> Self {
        let mut config = DemoConfig::default()
            .with_key_sizes(cli.key_sizes)
            .with_public_exponent(cli.public_exponent)
            .with_direction(cli.direction);
        config.message = cli.message;
        config.key_file = cli.key;
        config.out_dir = cli.out_dir;
        config
    }
}

fn run() -> anyhow::Result<()> {
    let config = DemoConfig::from(Cli::parse());

    let stdin = io::stdin();
    textbook_rsa::ui::run(&config, stdin.lock(), io::stdout())?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
