//! Magic-number peeking for `file-magic`.

use serde::{Serialize, Serializer};
use std::fmt;
use std::io::{self, Read};

/// Number of leading bytes inspected.
pub const MAGIC_LEN: usize = 4;

/// The leading bytes of an input, zero-padded when the input is shorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Magic {
    #[serde(rename = "magic", serialize_with = "serialize_hex")]
    pub bytes: [u8; MAGIC_LEN],
    /// How many of `bytes` actually came from the input.
    pub bytes_read: usize,
}

fn serialize_hex<S: Serializer>(bytes: &[u8; MAGIC_LEN], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_hex(bytes))
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(&self.bytes))
    }
}

/// Read up to [`MAGIC_LEN`] bytes from `reader`.
///
/// Keeps reading until the buffer is full or the input ends, so a pipe that
/// delivers bytes in small chunks still yields the full prefix.
///
/// # Errors
///
/// Returns any IO error other than `Interrupted` raised by the reader.
pub fn read_magic<R: Read>(reader: R) -> io::Result<Magic> {
    let mut prefix = Vec::with_capacity(MAGIC_LEN);
    reader.take(MAGIC_LEN as u64).read_to_end(&mut prefix)?;

    let mut bytes = [0u8; MAGIC_LEN];
    bytes[..prefix.len()].copy_from_slice(&prefix);
    Ok(Magic {
        bytes,
        bytes_read: prefix.len(),
    })
}
