//! Small encoding conversions used across test scenarios.

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Decode a hex string into raw bytes.
///
/// Odd-length input or non-hex digits are rejected; the original harness
/// silently produced garbage for malformed input.
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str).with_context(|| format!("invalid hex string {hex_str:?}"))
}

/// Lowercase hex dump of a byte sequence, two digits per byte.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Interpret a string of '0'/'1' digits as a base-2 integer and format it as
/// at-least-2-digit lowercase hex.
pub fn binary_to_hex(binary_digits: &str) -> Result<String> {
    let value = u128::from_str_radix(binary_digits, 2)
        .map_err(|_| anyhow!("invalid binary digit string {binary_digits:?}"))?;
    Ok(format!("{value:02x}"))
}

/// Encode an asset name's UTF-8 bytes as lowercase hex.
pub fn asset_name_to_hex(asset_name: &str) -> String {
    hex::encode(asset_name.as_bytes())
}

/// Round-trip check: true iff strict base64 decode-then-encode reproduces
/// the input exactly.
pub fn is_base64(value: &str) -> bool {
    match STANDARD.decode(value) {
        Ok(bytes) => STANDARD.encode(bytes) == value,
        Err(_) => false,
    }
}

/// True iff the value is a non-empty string of hexadecimal digits.
pub fn is_base16(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_hexdigit())
}
