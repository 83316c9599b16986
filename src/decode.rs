//! String-to-value coercion.
//!
//! Every leaf field of a [`Record`](crate::Record) must implement [`Decode`].
//! The crate implements it for the primitive types with the rules below;
//! applications implement it for their own types to take over parsing
//! entirely (the raw string is handed over untouched).
//!
//! | Type | Accepted input |
//! |------|----------------|
//! | `String`, `PathBuf` | anything, verbatim |
//! | `i8` .. `i64`, `isize` | a duration (`10m`, `1h30m`) stored as nanoseconds, else a base-10 integer |
//! | `u8` .. `u64`, `usize` | a base-10 unsigned integer |
//! | `bool` | `yes`/`no` in any case, else `1 t T TRUE true True` / `0 f F FALSE false False` |
//! | `f32`, `f64` | a floating-point literal |
//! | `Duration` | a duration expression, else a base-10 count of nanoseconds |
//! | `Option<T>` | whatever `T` accepts, stored as `Some` |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::DecodeError;

/// Decode a raw configuration string into `self`.
///
/// On error, `self` should be left as it was.
pub trait Decode {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError>;
}

impl Decode for String {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        *self = raw.to_string();
        Ok(())
    }
}

impl Decode for PathBuf {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        *self = PathBuf::from(raw);
        Ok(())
    }
}

impl Decode for bool {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        *self = parse_bool(raw)?;
        Ok(())
    }
}

impl Decode for Duration {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        let unsigned = raw.strip_prefix('+').unwrap_or(raw);
        *self = match humantime::parse_duration(unsigned) {
            Ok(d) => d,
            Err(e) => match raw.parse::<u64>() {
                Ok(nanos) => Duration::from_nanos(nanos),
                Err(_) => return Err(e.into()),
            },
        };
        Ok(())
    }
}

impl<T: Decode + Default> Decode for Option<T> {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        let mut value = T::default();
        value.decode(raw)?;
        *self = Some(value);
        Ok(())
    }
}

macro_rules! decode_signed {
    ($($t:ty),*) => {$(
        impl Decode for $t {
            fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
                *self = <$t>::try_from(parse_signed(raw)?)?;
                Ok(())
            }
        }
    )*};
}

macro_rules! decode_parsed {
    ($($t:ty),*) => {$(
        impl Decode for $t {
            fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
                *self = raw.parse::<$t>()?;
                Ok(())
            }
        }
    )*};
}

decode_signed!(i8, i16, i32, i64, isize);
decode_parsed!(u8, u16, u32, u64, usize, f32, f64);

/// Signed integers accept a duration expression first, so `session_timeout =
/// 10m` works on a plain `i64` field.
fn parse_signed(raw: &str) -> Result<i64, DecodeError> {
    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    if let Ok(d) = humantime::parse_duration(unsigned) {
        let nanos = i64::try_from(d.as_nanos())?;
        return Ok(if negative { -nanos } else { nanos });
    }
    Ok(raw.parse::<i64>()?)
}

fn parse_bool(raw: &str) -> Result<bool, DecodeError> {
    if raw.eq_ignore_ascii_case("yes") {
        return Ok(true);
    }
    if raw.eq_ignore_ascii_case("no") {
        return Ok(false);
    }
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(DecodeError::new(format!("invalid boolean '{raw}'"))),
    }
}
