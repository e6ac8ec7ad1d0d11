//! Binary <-> hex text, the display/paste form of sealed messages.

use crate::error::Result;

/// Lower-case hex, two digits per byte. Never fails.
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Accepts either case. Odd length or a non-hex character is `InvalidEncoding`.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}
