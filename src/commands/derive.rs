use zeroize::Zeroizing;

use crate::crypto::KEY_LEN;
use crate::error::Result;
use crate::key::{derive_key_pair, key_from_slice};

/// Recovers the public key belonging to a secret-key file's bytes.
pub fn derive_public_key(secret_key: &[u8]) -> Result<[u8; KEY_LEN]> {
    let secret = Zeroizing::new(key_from_slice(secret_key)?);
    let key_pair = derive_key_pair(&secret);
    Ok(*key_pair.public_key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::key::KeyPair;

    #[test]
    fn matches_generated_public_key() {
        let kp = KeyPair::generate().unwrap();
        assert_eq!(&derive_public_key(kp.secret_key()).unwrap(), kp.public_key());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            derive_public_key(&[0u8; 64]),
            Err(Error::InvalidKeyLength { expected: 32, actual: 64 })
        ));
    }
}
