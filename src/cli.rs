use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sealed_message_utility::defaults::Defaults;

/// Sealed-box message utility: key pairs, encrypt to a public key, decrypt with your secret key
#[derive(Parser, Debug)]
#[command(version, about = "Sealed-box message utility")]
pub struct Cli {
    /// Log level for stderr output (RUST_LOG takes precedence)
    #[arg(
        long,
        global = true,
        default_value = Defaults::LOG_LEVEL,
        value_parser = clap::value_parser!(tracing::Level)
    )]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a key pair: writes public.key and private.key
    Keygen {
        /// Directory to write the key files into (created if missing)
        #[arg(long, default_value = Defaults::KEYPAIR_OUT_DIR)]
        out_dir: PathBuf,

        /// Print the written paths as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encrypt a message to the other person's public key; prints hex
    Encrypt {
        /// The other person's public key file
        #[arg(long)]
        public_key: PathBuf,

        /// Message text (read from stdin when omitted)
        #[arg(long)]
        message: Option<String>,
    },

    /// Decrypt a hex message with your secret key
    Decrypt {
        /// Your secret key file
        #[arg(long)]
        secret_key: PathBuf,

        /// Your public key file
        #[arg(long)]
        public_key: PathBuf,

        /// Hex ciphertext (read from stdin when omitted)
        #[arg(long)]
        ciphertext: Option<String>,
    },

    /// Recompute the public key from a secret key file
    DerivePublic {
        /// Secret key file
        #[arg(long)]
        secret_key: PathBuf,

        /// Write the raw public key here instead of printing hex
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
