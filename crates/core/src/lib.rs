//! rock32-core: Crockford-style base-32 codec with bit-granular modes
//!
//! This library converts between raw bytes and a 32-symbol text alphabet,
//! five bits per symbol:
//! - Whole-buffer encode/decode, byte-aligned or with an exact bit count
//!   for packed fields shorter than a whole number of bytes
//! - Streaming adapters that carry the same codec over `io::Write` /
//!   `io::Read` in arbitrary-sized chunks
//! - A flag-value adapter so byte buffers can ride in command-line options
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `encoding`: the alphabet, its 256-entry decode table, and length math
//! - `codec`: the pure 5-bit group pack/unpack algorithms
//! - `stream`: incremental encoder and decoder over `std::io`
//! - `value`: byte buffers as `Display`/`FromStr` flag values
//!
//! # Design Principles
//!
//! - **No panics**: errors are structured values; the only panics are
//!   documented destination-sizing preconditions on the `_into` variants
//! - **Immutable handles**: an [`Encoding`] never changes after construction
//!   and is safe to share across threads without synchronization
//! - **One algorithm**: the streaming adapters delegate every bit of group
//!   arithmetic to the whole-buffer codec, never duplicating it

pub mod codec;
pub mod encoding;
pub mod error;
pub mod stream;
pub mod value;

// Re-export commonly used types
pub use encoding::{Encoding, LWR_ENCODING, STD_ENCODING};
pub use error::{Error, Result};
pub use stream::{StreamDecoder, StreamEncoder};
pub use value::Value;
