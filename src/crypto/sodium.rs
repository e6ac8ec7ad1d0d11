//! libsodium-compatible sealed box (`crypto_box_seal` / `crypto_box_seal_open`).
//!
//! Wire format: `[ephemeral_pubkey:32][tag:16][ciphertext]`
//!
//! - X25519 between an ephemeral secret and the recipient public key
//! - nonce = BLAKE2b-192(ephemeral_pubkey || recipient_pubkey)
//! - XSalsa20-Poly1305 over the plaintext

use blake2::digest::consts::U24;
use blake2::{Blake2b, Digest};
use crypto_box::aead::generic_array::GenericArray;
use crypto_box::aead::Aead;
use crypto_box::{PublicKey, SalsaBox, SecretKey};
use rand_core::{OsRng, RngCore};
use zeroize::Zeroizing;

use super::{CryptoProvider, KEY_LEN, SEAL_OVERHEAD};
use crate::error::{Error, Result};

type Nonce = GenericArray<u8, U24>;

/// Default provider, byte-compatible with the libsodium sealed box.
#[derive(Debug, Clone, Copy, Default)]
pub struct SodiumCompat;

fn seal_nonce(ephemeral_pk: &[u8; KEY_LEN], recipient_pk: &[u8; KEY_LEN]) -> Nonce {
    let mut hasher = Blake2b::<U24>::new();
    hasher.update(ephemeral_pk);
    hasher.update(recipient_pk);
    Nonce::clone_from_slice(&hasher.finalize())
}

impl CryptoProvider for SodiumCompat {
    fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| Error::SecureRandomUnavailable(e.to_string()))
    }

    fn public_from_secret(&self, secret_key: &[u8; KEY_LEN]) -> [u8; KEY_LEN] {
        *SecretKey::from(*secret_key).public_key().as_bytes()
    }

    fn seal(&self, plaintext: &[u8], recipient_public_key: &[u8; KEY_LEN]) -> Result<Vec<u8>> {
        let mut ephemeral = Zeroizing::new([0u8; KEY_LEN]);
        self.fill_random(&mut ephemeral[..])?;
        let ephemeral_sk = SecretKey::from(*ephemeral);
        let ephemeral_pk = ephemeral_sk.public_key();

        let nonce = seal_nonce(ephemeral_pk.as_bytes(), recipient_public_key);
        let recipient = PublicKey::from(*recipient_public_key);

        let body = SalsaBox::new(&recipient, &ephemeral_sk)
            .encrypt(&nonce, plaintext)
            .map_err(|_| Error::EncryptionFailed)?;

        let mut out = Vec::with_capacity(KEY_LEN + body.len());
        out.extend_from_slice(ephemeral_pk.as_bytes());
        out.extend_from_slice(&body);
        Ok(out)
    }

    fn unseal(
        &self,
        message: &[u8],
        public_key: &[u8; KEY_LEN],
        secret_key: &[u8; KEY_LEN],
    ) -> Result<Vec<u8>> {
        if message.len() < SEAL_OVERHEAD {
            return Err(Error::AuthenticationFailure);
        }

        let (ephemeral_bytes, body) = message.split_at(KEY_LEN);
        let mut ephemeral_pk = [0u8; KEY_LEN];
        ephemeral_pk.copy_from_slice(ephemeral_bytes);

        let nonce = seal_nonce(&ephemeral_pk, public_key);
        let recipient_sk = SecretKey::from(*secret_key);

        SalsaBox::new(&PublicKey::from(ephemeral_pk), &recipient_sk)
            .decrypt(&nonce, body)
            .map_err(|_| Error::AuthenticationFailure)
    }
}
