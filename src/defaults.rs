//! Central place for default values.
//! Update these and the whole app picks them up.

pub struct Defaults;

impl Defaults {
    /* Create Key Pair */
    pub const KEYPAIR_OUT_DIR: &'static str = ".";
    pub const PUBLIC_KEY_FILE_NAME: &'static str = "public.key";
    pub const SECRET_KEY_FILE_NAME: &'static str = "private.key";

    /* Logging (stderr, overridable with RUST_LOG) */
    pub const LOG_LEVEL: &'static str = "warn";

    /* Decryption (what the user sees for any unseal failure) */
    pub const DECRYPT_FAILED_MESSAGE: &'static str = "decryption failed";
}
