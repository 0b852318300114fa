//! Error types for the rock32 codec.
//!
//! All operations return structured errors rather than panicking.
//! Variants carry fields, not formatted strings, so callers can branch
//! on them programmatically (e.g. report the exact corruption offset).

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the codec.
///
/// Each variant corresponds to a specific failure domain:
/// - Corrupt input: a decoded byte fell outside the configured alphabet
/// - Bit-count overflow: a caller declared more significant bits than the
///   source buffer actually holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Decoding hit a byte that is not a symbol of the alphabet.
    ///
    /// `offset` is 0-based and relative to the start of the input passed to
    /// the failing call. Bytes already decoded into the destination before
    /// this offset remain valid.
    #[error("illegal rock32 data at input byte {offset}")]
    CorruptInput { offset: usize },

    /// A bit-count operation declared more bits than the source provides.
    #[error("bit count {bits} exceeds the {available} bits available")]
    BitCountOverflow { bits: usize, available: usize },
}
