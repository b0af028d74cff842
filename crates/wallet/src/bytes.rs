//! Lenient hex input for seeds and descriptors

use xverify_api::{Error, Result};
use zeroize::{Zeroize, Zeroizing};

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ':' | '_' | '-')
}

/// Decode hex typed or pasted by a person
///
/// Accepts an optional `0x`/`0X` prefix and ignores spaces, `:`, `_` and
/// `-` between digits. Both cases are accepted. The decoded bytes are wiped
/// when the returned buffer is dropped.
pub(crate) fn decode_hex_like(context: &'static str, input: &str) -> Result<Zeroizing<Vec<u8>>> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let mut digits = String::with_capacity(body.len());
    for c in body.chars() {
        if c.is_ascii_hexdigit() {
            digits.push(c);
        } else if !is_separator(c) {
            digits.zeroize();
            return Err(Error::parameter(
                context,
                format!("invalid hex character {:?}", c),
            ));
        }
    }

    let decoded = hex::decode(&digits);
    digits.zeroize();
    decoded
        .map(Zeroizing::new)
        .map_err(|e| Error::parameter(context, e.to_string()))
}
