//! Confidential short messages with public-key sealed boxes.
//!
//! One party creates a key pair and shares the public half. Anyone holding that
//! public key can [`seal`] a message that only the matching secret key can [`unseal`].
//! Sealed messages travel as hex text ([`encoding`]); keys live in raw 32-byte
//! files ([`key_store`]).
//!
//! Every operation is stateless and takes its key material as an argument.
//! The [`commands`] module is the surface a front end calls into.

pub mod commands;
pub mod crypto;
pub mod defaults;
pub mod encoding;
mod error;
pub mod key;
pub mod key_store;

pub use crypto::{seal, unseal, CryptoProvider, SealedBoxCipher, SodiumCompat};
pub use crypto::{KEY_LEN, MAX_PLAINTEXT_LEN, SEAL_OVERHEAD, TAG_LEN};
pub use error::{Error, Result};
pub use key::{derive_key_pair, KeyPair};
