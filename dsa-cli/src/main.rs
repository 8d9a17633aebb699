//! Classic DSA command-line tool.

mod commands;
mod encoding;
mod storage;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use classic_dsa::KeySize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dsa")]
#[command(about = "Classic DSA key generation, signing and validation", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate domain parameters and a keypair
    Generate {
        /// Bit length of the prime modulus p
        #[arg(short = 'n', default_value_t = 1024)]
        n: u32,

        /// Bit length of the prime divisor q
        #[arg(short = 'l', default_value_t = 160)]
        l: u32,

        /// Write `<prefix>_public.json` and `<prefix>_private.json` instead of printing
        output_prefix: Option<PathBuf>,
    },
    /// Sign a message with a stored keypair
    Sign {
        /// Public key JSON file
        public_key_file: PathBuf,

        /// Private key JSON file
        private_key_file: PathBuf,

        /// Message to sign (its UTF-8 bytes are signed)
        message: String,

        /// Write `<out_file>.json` instead of printing
        out_file: Option<PathBuf>,
    },
    /// Validate a signed message file against a public key
    Validate {
        /// Signed message JSON file
        signed_file: PathBuf,

        /// Public key JSON file
        public_key_file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Generate {
            n,
            l,
            output_prefix,
        } => {
            let size = KeySize::new(n, l)
                .with_context(|| format!("unusable key size N = {n}, L = {l}"))?;
            commands::generate::execute(size, output_prefix.as_deref())?;
        }
        Commands::Sign {
            public_key_file,
            private_key_file,
            message,
            out_file,
        } => {
            commands::sign::execute(
                &public_key_file,
                &private_key_file,
                &message,
                out_file.as_deref(),
            )?;
        }
        Commands::Validate {
            signed_file,
            public_key_file,
        } => {
            if commands::validate::execute(&signed_file, &public_key_file)? {
                println!("Signature is VALID!");
            } else {
                println!("Signature is INVALID!");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
