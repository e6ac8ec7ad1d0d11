pub mod sealed_box;
pub mod sodium;

pub use sealed_box::{seal, unseal, SealedBoxCipher};
pub use sodium::SodiumCompat;

use crate::error::Result;

/// Curve25519 key size, public and secret alike.
pub const KEY_LEN: usize = 32;
/// Poly1305 tag size.
pub const TAG_LEN: usize = 16;
/// Bytes a sealed message adds on top of the plaintext: ephemeral public key + tag.
pub const SEAL_OVERHEAD: usize = KEY_LEN + TAG_LEN;
/// Largest plaintext `seal` will accept.
pub const MAX_PLAINTEXT_LEN: usize = 16 * 1024 * 1024;

/// The primitives the key generator and the sealed-box cipher are built on.
///
/// Implementations are stateless; every call takes its key material explicitly.
pub trait CryptoProvider {
    /// Fill `buf` from a cryptographically secure source.
    fn fill_random(&self, buf: &mut [u8]) -> Result<()>;

    /// Scalar-multiply `secret_key` with the curve base point.
    fn public_from_secret(&self, secret_key: &[u8; KEY_LEN]) -> [u8; KEY_LEN];

    /// Anonymous-sender authenticated encryption to `recipient_public_key`.
    fn seal(&self, plaintext: &[u8], recipient_public_key: &[u8; KEY_LEN]) -> Result<Vec<u8>>;

    /// Inverse of `seal`. `public_key` is used as given, it is not re-derived from `secret_key`.
    fn unseal(
        &self,
        message: &[u8],
        public_key: &[u8; KEY_LEN],
        secret_key: &[u8; KEY_LEN],
    ) -> Result<Vec<u8>>;
}
