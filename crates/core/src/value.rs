//! Byte buffers as command-line flag values.
//!
//! [`Value`] renders through `Display` as standard-case rock32 text and
//! parses back through `FromStr` with the standard handle, so any
//! `FromStr`-driven argument parser can accept raw bytes on the command
//! line. Invalid text surfaces the codec's [`Error`] verbatim, corruption
//! offset included.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::encoding::STD_ENCODING;
use crate::error::Error;

/// A byte buffer carried in and out of textual flag form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Value(pub Vec<u8>);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&STD_ENCODING.encode(&self.0))
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STD_ENCODING.decode(s).map(Value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value(bytes)
    }
}

impl AsRef<[u8]> for Value {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Value {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_standard_case() {
        let v = Value(vec![0x34, 0x5A]);
        assert_eq!(v.to_string(), "GTPY");
    }

    #[test]
    fn test_parse_round_trips_text() {
        let v: Value = "PB1SA5DXF008Q551PT1YW".parse().unwrap();
        assert_eq!(&*v, b"hello, world\n");
        assert_eq!(v.to_string(), "PB1SA5DXF008Q551PT1YW");
    }

    #[test]
    fn test_parse_surfaces_corruption_offset() {
        let err = "bad input!".parse::<Value>().unwrap_err();
        assert_eq!(err, Error::CorruptInput { offset: 0 });
    }

    #[test]
    fn test_byte_access() {
        let v = Value::from(vec![0x34, 0x5A]);
        assert_eq!(v.as_ref(), &[0x34, 0x5A]);
        assert_eq!(v.len(), 2);
    }
}
