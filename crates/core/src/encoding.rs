//! The 32-symbol alphabet and its inverse lookup table.
//!
//! An [`Encoding`] pairs an ordered alphabet (index = 5-bit value) with a
//! full 256-entry decode table (raw input byte = index), so decoding one
//! symbol is a single branch-free array lookup. Two ready-made handles are
//! provided as compile-time statics: [`STD_ENCODING`] (uppercase) and
//! [`LWR_ENCODING`] (lowercase), mirror images under case-folding. The ten
//! digit symbols are shared between the two.

/// Decode-table value meaning "this byte is not part of the alphabet".
pub(crate) const SENTINEL: u8 = 0xFF;

const STD_SYMBOLS: [u8; 32] = *b"YBNDRFG8EJKMCPQX0T1VW2SZA345H769";
const LWR_SYMBOLS: [u8; 32] = *b"ybndrfg8ejkmcpqx0t1vw2sza345h769";

/// The standard (uppercase) encoding.
pub static STD_ENCODING: Encoding = Encoding::new(STD_SYMBOLS);

/// The lowercase encoding.
pub static LWR_ENCODING: Encoding = Encoding::new(LWR_SYMBOLS);

/// A base-32 alphabet paired with its decode table.
///
/// Immutable once constructed; shared references may be read concurrently
/// from any number of threads.
///
/// # Invariants
/// - `symbols` holds 32 distinct printable ASCII bytes (caller-supplied
///   alphabets must satisfy this; construction does not validate it)
/// - `decode_map[b]` is the index of `b` in `symbols`, or [`SENTINEL`]
#[derive(Debug, Clone)]
pub struct Encoding {
    pub(crate) symbols: [u8; 32],
    pub(crate) decode_map: [u8; 256],
}

impl Encoding {
    /// Build an encoding from a 32-symbol alphabet.
    ///
    /// The decode table is sentinel-filled, then the 32 symbol positions are
    /// overwritten with their index. Supplying duplicate or non-ASCII
    /// symbols is not rejected here but leaves the resulting encoding with
    /// undefined lookups for the colliding or uncovered bytes.
    pub const fn new(symbols: [u8; 32]) -> Self {
        let mut decode_map = [SENTINEL; 256];

        let mut i = 0;
        while i < symbols.len() {
            decode_map[symbols[i] as usize] = i as u8;
            i += 1;
        }

        Self {
            symbols,
            decode_map,
        }
    }

    /// Symbol capacity needed to encode `n` source bytes.
    ///
    /// This rounds up to a whole 8-symbol group; byte-aligned encoding of
    /// `n` bytes actually emits `ceil(8n / 5)` symbols, which equals this
    /// bound exactly when `n` is a multiple of 5.
    pub fn encoded_len(&self, n: usize) -> usize {
        (n + 4) / 5 * 8
    }

    /// Byte capacity needed to decode `n` symbols (upper bound on output).
    pub fn decoded_len(&self, n: usize) -> usize {
        (n + 7) / 8 * 5
    }
}
