//! Request/response entry points for a front end: file paths and text in,
//! key bytes, hex ciphertext or plaintext out.

pub mod decrypt;
pub mod derive;
pub mod encrypt;
pub mod key_load;
pub mod keygen;

pub use decrypt::{decrypt_message, decrypt_message_opaque, DecryptFailed};
pub use derive::derive_public_key;
pub use encrypt::encrypt_message;
pub use key_load::load_key_file;
pub use keygen::{create_key_pair, KeyPairPaths};
