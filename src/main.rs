use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use zeroize::Zeroizing;

use sealed_message_utility::commands::{
    create_key_pair, decrypt_message_opaque, derive_public_key, encrypt_message, load_key_file,
};
use sealed_message_utility::{encoding, key_store};

mod cli;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    match cli.cmd {
        Command::Keygen { out_dir, json } => {
            let paths = create_key_pair(&out_dir)
                .with_context(|| format!("creating key pair in {}", out_dir.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&paths)?);
            } else {
                println!("✓ Wrote {}", paths.public_key_path.display());
                println!("✓ Wrote {}", paths.secret_key_path.display());
            }
            Ok(())
        }

        Command::Encrypt { public_key, message } => {
            let recipient = read_key(&public_key)?;
            let text = match message {
                Some(m) => m,
                None => read_stdin_text()?,
            };

            let hex_ciphertext = encrypt_message(&text, &recipient).context("encrypting message")?;
            println!("{hex_ciphertext}");
            Ok(())
        }

        Command::Decrypt { secret_key, public_key, ciphertext } => {
            let secret = Zeroizing::new(read_key(&secret_key)?);
            let public = read_key(&public_key)?;
            let hex_ciphertext = match ciphertext {
                Some(c) => c,
                None => read_stdin_text()?,
            };

            let plaintext = decrypt_message_opaque(&hex_ciphertext, secret.as_slice(), &public)?;
            println!("{plaintext}");
            Ok(())
        }

        Command::DerivePublic { secret_key, out } => {
            let secret = Zeroizing::new(read_key(&secret_key)?);
            let public = derive_public_key(secret.as_slice())
                .with_context(|| format!("deriving public key from {}", secret_key.display()))?;

            match out {
                Some(p) => {
                    key_store::save(&p, &public).with_context(|| format!("writing {}", p.display()))?;
                    println!("✓ Wrote {}", p.display());
                }
                None => println!("{}", encoding::encode(&public)),
            }
            Ok(())
        }
    }
}

fn init_tracing(log_level: tracing::Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}

fn read_key(path: &Path) -> Result<Vec<u8>> {
    load_key_file(path).with_context(|| format!("reading key file {}", path.display()))
}

/// Whole stdin, minus one trailing newline.
fn read_stdin_text() -> Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).context("reading stdin")?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
