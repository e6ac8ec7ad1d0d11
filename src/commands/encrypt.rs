use crate::crypto::sealed_box;
use crate::encoding;
use crate::error::Result;
use crate::key::key_from_slice;

/// Seals UTF-8 text to `recipient_public_key` and returns the lower-case hex form.
pub fn encrypt_message(plaintext: &str, recipient_public_key: &[u8]) -> Result<String> {
    let recipient = key_from_slice(recipient_public_key)?;
    let sealed = sealed_box::seal(plaintext.as_bytes(), &recipient)?;
    Ok(encoding::encode(&sealed))
}
