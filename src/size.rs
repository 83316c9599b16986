use std::fmt;

use crate::decode::Decode;
use crate::error::DecodeError;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// A size in bytes, configured as `512`, `64K`, `10MB`, `2 GB`, ...
///
/// Suffixes are case-insensitive and base 1024. A trailing `B` is optional;
/// no suffix at all means plain bytes. An empty value decodes to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize(pub u64);

impl ByteSize {
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Render with the largest unit not exceeding the value, e.g. `6.6 KB`.
    ///
    /// Bytes are printed without decimals; larger units get one decimal,
    /// rounded up. Zero renders as `0`.
    pub fn human_readable(&self) -> String {
        let bytes = self.0;
        if bytes == 0 {
            return "0".to_string();
        }

        let mut exp = 0;
        while exp + 1 < UNITS.len() && bytes >= 1u64 << (10 * (exp + 1)) {
            exp += 1;
        }
        if exp == 0 {
            return format!("{bytes} B");
        }

        let unit = 1u128 << (10 * exp);
        let tenths = (u128::from(bytes) * 10).div_ceil(unit);
        format!("{}.{} {}", tenths / 10, tenths % 10, UNITS[exp])
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        ByteSize(bytes)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.human_readable())
    }
}

impl Decode for ByteSize {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        let value = raw.trim().to_ascii_lowercase();
        if value.is_empty() {
            *self = ByteSize(0);
            return Ok(());
        }

        let number = value.strip_suffix('b').unwrap_or(&value);
        let (digits, shift) = match number.as_bytes().last() {
            Some(b'k') => (&number[..number.len() - 1], 10),
            Some(b'm') => (&number[..number.len() - 1], 20),
            Some(b'g') => (&number[..number.len() - 1], 30),
            Some(b't') => (&number[..number.len() - 1], 40),
            _ => (number, 0),
        };

        let magnitude: u64 = digits.trim_end().parse()?;
        let bytes = magnitude
            .checked_mul(1u64 << shift)
            .ok_or_else(|| DecodeError::new(format!("size '{raw}' does not fit in 64 bits")))?;
        *self = ByteSize(bytes);
        Ok(())
    }
}
