//! Byte-preserving text view
//!
//! pkg-config files are not guaranteed to be UTF-8. Every input byte is
//! mapped to the char with the same code point (U+0000..=U+00FF), so the
//! string-based stages and the grammar can run on any input, and writing the
//! result maps each char back to its original byte.

/// Map each byte to the char with the same value.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Map a decoded line back to its bytes.
///
/// Chars outside U+0000..=U+00FF never come out of [`decode`]; should one
/// appear anyway it is written as its UTF-8 encoding.
#[must_use]
pub fn encode(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        match u8::try_from(c) {
            Ok(byte) => bytes.push(byte),
            Err(_) => bytes.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes()),
        }
    }
    bytes
}

/// Split input into physical lines on `\n` only.
///
/// A `\r` before the newline stays on its line. A final newline does not
/// start an extra empty line.
pub fn physical_lines(input: &str) -> impl Iterator<Item = &str> {
    input.split_terminator('\n')
}
