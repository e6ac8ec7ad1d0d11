use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::crypto::sealed_box;
use crate::defaults::Defaults;
use crate::encoding;
use crate::error::{Error, Result};
use crate::key::{key_from_slice, KeyPair};

/// What a user sees for any decrypt failure. The cause is only logged.
#[derive(Debug, thiserror::Error)]
#[error("{}", Defaults::DECRYPT_FAILED_MESSAGE)]
pub struct DecryptFailed;

/// Hex ciphertext in, plaintext out.
///
/// `secret_key` and `public_key` come from two separately chosen files and are combined
/// as-is. A mismatched pair is only warned about; the unseal then fails authentication.
pub fn decrypt_message(hex_ciphertext: &str, secret_key: &[u8], public_key: &[u8]) -> Result<String> {
    let sealed = encoding::decode(hex_ciphertext.trim())?;

    let secret = Zeroizing::new(key_from_slice(secret_key)?);
    let key_pair = KeyPair::from_parts(&secret, &key_from_slice(public_key)?);
    if !key_pair.is_consistent() {
        warn!("public key file does not match the secret key file");
    }

    let plaintext = sealed_box::unseal(&sealed, &key_pair)?;
    String::from_utf8(plaintext).map_err(|_| Error::InvalidUtf8)
}

/// [`decrypt_message`] with every failure collapsed into [`DecryptFailed`].
pub fn decrypt_message_opaque(
    hex_ciphertext: &str,
    secret_key: &[u8],
    public_key: &[u8],
) -> std::result::Result<String, DecryptFailed> {
    decrypt_message(hex_ciphertext, secret_key, public_key).map_err(|e| {
        debug!(error = %e, "decrypt failed");
        DecryptFailed
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::encrypt_message;

    #[test]
    fn decrypts_what_encrypt_produced() {
        let kp = KeyPair::generate().unwrap();
        let hex_text = encrypt_message("olá, mundo", kp.public_key()).unwrap();

        let plain = decrypt_message(&hex_text, kp.secret_key(), kp.public_key()).unwrap();
        assert_eq!(plain, "olá, mundo");
    }

    #[test]
    fn pasted_text_is_trimmed_and_case_insensitive() {
        let kp = KeyPair::generate().unwrap();
        let hex_text = encrypt_message("paste me", kp.public_key()).unwrap();
        let pasted = format!("  {}\n", hex_text.to_uppercase());

        let plain = decrypt_message(&pasted, kp.secret_key(), kp.public_key()).unwrap();
        assert_eq!(plain, "paste me");
    }

    #[test]
    fn bad_hex_is_invalid_encoding() {
        let kp = KeyPair::generate().unwrap();
        let result = decrypt_message("zz", kp.secret_key(), kp.public_key());
        assert!(matches!(result, Err(Error::InvalidEncoding(_))));
    }

    #[test]
    fn wrong_secret_key_fails_authentication() {
        let recipient = KeyPair::generate().unwrap();
        let stranger = KeyPair::generate().unwrap();
        let hex_text = encrypt_message("secret", recipient.public_key()).unwrap();

        let result = decrypt_message(&hex_text, stranger.secret_key(), stranger.public_key());
        assert!(matches!(result, Err(Error::AuthenticationFailure)));
    }

    #[test]
    fn swapped_key_files_fail_authentication() {
        let kp = KeyPair::generate().unwrap();
        let hex_text = encrypt_message("swap", kp.public_key()).unwrap();

        let result = decrypt_message(&hex_text, kp.public_key(), kp.secret_key());
        assert!(matches!(result, Err(Error::AuthenticationFailure)));
    }

    #[test]
    fn wrong_length_key_is_rejected() {
        let kp = KeyPair::generate().unwrap();
        let hex_text = encrypt_message("len", kp.public_key()).unwrap();

        let result = decrypt_message(&hex_text, &kp.secret_key()[..16], kp.public_key());
        assert!(matches!(result, Err(Error::InvalidKeyLength { actual: 16, .. })));
    }

    #[test]
    fn every_failure_reads_the_same_to_the_user() {
        let kp = KeyPair::generate().unwrap();
        let stranger = KeyPair::generate().unwrap();
        let good = encrypt_message("fine", kp.public_key()).unwrap();
        let binary = encoding::encode(&sealed_box::seal(&[0xff, 0xfe], kp.public_key()).unwrap());
        let (sk, pk) = (&kp.secret_key()[..], &kp.public_key()[..]);

        let cases: [(&str, &[u8], &[u8]); 4] = [
            (&good, stranger.secret_key(), stranger.public_key()),
            ("zz", sk, pk),
            (&good, &sk[..8], pk),
            (&binary, sk, pk),
        ];

        let causes: Vec<Error> = cases
            .iter()
            .map(|(text, secret, public)| decrypt_message(text, secret, public).unwrap_err())
            .collect();
        assert!(matches!(causes[0], Error::AuthenticationFailure));
        assert!(matches!(causes[1], Error::InvalidEncoding(_)));
        assert!(matches!(causes[2], Error::InvalidKeyLength { .. }));
        assert!(matches!(causes[3], Error::InvalidUtf8));

        for (text, secret, public) in cases {
            let err = decrypt_message_opaque(text, secret, public).unwrap_err();
            assert_eq!(err.to_string(), "decryption failed");
        }
    }

    #[test]
    fn opaque_decrypt_passes_plaintext_through() {
        let kp = KeyPair::generate().unwrap();
        let hex_text = encrypt_message("through", kp.public_key()).unwrap();

        let plain = decrypt_message_opaque(&hex_text, kp.secret_key(), kp.public_key()).unwrap();
        assert_eq!(plain, "through");
    }

    #[test]
    fn non_utf8_plaintext_is_reported() {
        let kp = KeyPair::generate().unwrap();
        let sealed = sealed_box::seal(&[0xff, 0xfe, 0xfd], kp.public_key()).unwrap();
        let hex_text = encoding::encode(&sealed);

        let result = decrypt_message(&hex_text, kp.secret_key(), kp.public_key());
        assert!(matches!(result, Err(Error::InvalidUtf8)));
    }
}
