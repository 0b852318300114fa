//! The 5-bit group pack/unpack algorithms.
//!
//! Both directions treat the byte buffer as a contiguous MSB-first bit
//! stream. Five bits per symbol against eight bits per byte means the
//! alignment pattern repeats every 40 bits: one *group* of 5 source bytes
//! maps to 8 symbols. A 5-bit slice may straddle a byte boundary, in which
//! case it combines bits from two adjacent bytes.
//!
//! Each direction has two modes:
//! - **Byte-aligned**: the significant length is the whole buffer; a short
//!   final group is handled by the loop bound (encode) or a fixed
//!   symbols-to-bytes table (decode)
//! - **Bit-count**: the caller declares the exact number of significant
//!   bits, which need not be a multiple of 5 or 8; encode masks the excess
//!   low bits of a straddling final symbol to zero, decode trusts the
//!   declared length instead of the symbol-count table
//!
//! # Example
//! ```
//! use rock32_core::STD_ENCODING;
//!
//! let text = STD_ENCODING.encode(&[0x34, 0x5A]);
//! assert_eq!(text, "GTPY");
//! assert_eq!(STD_ENCODING.decode("GTPY").unwrap(), vec![0x34, 0x5A]);
//! ```

use crate::encoding::{Encoding, SENTINEL};
use crate::error::{Error, Result};

/// Output bytes carried by a short final decode group of `j` symbols.
///
/// A group of fewer than 8 symbols still holds meaningful whole bytes even
/// though its trailing low bits are unused.
const GROUP_BYTES: [usize; 9] = [0, 1, 1, 2, 2, 3, 4, 4, 5];

impl Encoding {
    /// Shared encode walker; `bits` of `None` means byte-aligned.
    ///
    /// # Invariants
    /// - `bits`, when present, never exceeds `8 * src.len()`
    /// - the bit cursor `i` advances in steps of 5; the source slice is
    ///   shortened by one byte whenever the cursor crosses a byte boundary
    fn encode_groups(&self, dst: &mut [u8], mut src: &[u8], bits: Option<usize>) -> usize {
        let mut off = 0;
        let mut i = 0;

        loop {
            match bits {
                Some(b) if i >= b => break,
                None if src.is_empty() => break,
                _ => {}
            }

            let b0 = src[0];
            let b1 = if src.len() > 1 { src[1] } else { 0 };

            // Bit offset of the cursor within b0; the 5-bit slice straddles
            // into b1 once the offset passes 3.
            let offset = i % 8;
            let mut value = if offset < 4 {
                (b0 >> (3 - offset)) & 31
            } else {
                (b0 & (31 >> (offset - 3))) << (offset - 3) | b1 >> (11 - offset)
            };

            // A final symbol straddling the declared bit count must not leak
            // whatever bits follow in the buffer.
            if let Some(b) = bits {
                if i + 5 > b {
                    value &= 0xFF << (i + 5 - b);
                }
            }

            dst[off] = self.symbols[value as usize];
            off += 1;

            if offset > 2 {
                src = &src[1..];
            }
            i += 5;
        }

        off
    }

    /// Encode `src` byte-aligned into `dst`, returning the symbol count.
    ///
    /// Emits `ceil(8 * src.len() / 5)` symbols.
    ///
    /// # Panics
    /// Panics if `dst` is shorter than [`encoded_len`](Self::encoded_len)
    /// of `src.len()`.
    pub fn encode_into(&self, dst: &mut [u8], src: &[u8]) -> usize {
        self.encode_groups(dst, src, None)
    }

    /// Encode exactly `bits` significant bits of `src` into `dst`.
    ///
    /// The final symbol, if it straddles the bit-count boundary, has its
    /// excess low bits masked to zero, so the output depends only on the
    /// declared bits and never on trailing garbage in a reused buffer.
    ///
    /// # Errors
    /// Returns [`Error::BitCountOverflow`] if `bits > 8 * src.len()`.
    ///
    /// # Panics
    /// Panics if `dst` is shorter than [`encoded_len`](Self::encoded_len)
    /// of `src.len()`.
    pub fn encode_bits_into(&self, dst: &mut [u8], src: &[u8], bits: usize) -> Result<usize> {
        if bits > src.len() * 8 {
            return Err(Error::BitCountOverflow {
                bits,
                available: src.len() * 8,
            });
        }

        Ok(self.encode_groups(dst, src, Some(bits)))
    }

    /// Encode `src` byte-aligned into a freshly allocated string.
    pub fn encode(&self, src: &[u8]) -> String {
        let mut buffer = vec![0; self.encoded_len(src.len())];
        let n = self.encode_into(&mut buffer, src);
        buffer.truncate(n);

        String::from_utf8(buffer).expect("alphabet symbols are ASCII")
    }

    /// Encode exactly `bits` significant bits of `src` into a string.
    ///
    /// # Errors
    /// Returns [`Error::BitCountOverflow`] if `bits > 8 * src.len()`.
    pub fn encode_bits(&self, src: &[u8], bits: usize) -> Result<String> {
        let mut buffer = vec![0; self.encoded_len(src.len())];
        let n = self.encode_bits_into(&mut buffer, src, bits)?;
        buffer.truncate(n);

        Ok(String::from_utf8(buffer).expect("alphabet symbols are ASCII"))
    }

    /// Shared decode walker; `bits` of `None` means byte-aligned.
    ///
    /// Consumes up to 8 symbols per group, rebuilding 5 output bytes from
    /// the eight 5-bit values by the fixed 40-bit realignment. All 5 bytes
    /// of a group slot are written even for a short final group; `off` only
    /// advances over the meaningful ones.
    fn decode_groups(&self, dst: &mut [u8], mut src: &[u8], bits: Option<usize>) -> Result<usize> {
        let total = src.len();
        let mut bits_left = bits;
        let mut off = 0;

        while !src.is_empty() {
            let mut group = [0u8; 8];

            let mut j = 0;
            while j < 8 && !src.is_empty() {
                let raw = src[0];
                src = &src[1..];

                group[j] = self.decode_map[raw as usize];
                if group[j] == SENTINEL {
                    return Err(Error::CorruptInput {
                        offset: total - src.len() - 1,
                    });
                }
                j += 1;
            }

            dst[off] = group[0] << 3 | group[1] >> 2;
            dst[off + 1] = group[1] << 6 | group[2] << 1 | group[3] >> 4;
            dst[off + 2] = group[3] << 4 | group[4] >> 1;
            dst[off + 3] = group[4] << 7 | group[5] << 2 | group[6] >> 3;
            dst[off + 4] = group[6] << 5 | group[7];

            match bits_left {
                None => off += GROUP_BYTES[j],
                Some(ref mut remaining) => {
                    let in_group = (*remaining).min(40);
                    off += (in_group + 7) / 8;
                    *remaining = remaining.saturating_sub(40);
                }
            }
        }

        Ok(off)
    }

    /// Decode `src` byte-aligned into `dst`, returning the byte count.
    ///
    /// A short final group of `j` symbols contributes
    /// `[0, 1, 1, 2, 2, 3, 4, 4, 5][j]` bytes.
    ///
    /// # Errors
    /// Returns [`Error::CorruptInput`] at the 0-based offset of the first
    /// byte of `src` outside the alphabet. Bytes decoded into `dst` before
    /// that offset remain valid.
    ///
    /// # Panics
    /// Panics if `dst` is shorter than [`decoded_len`](Self::decoded_len)
    /// of `src.len()`.
    pub fn decode_into(&self, dst: &mut [u8], src: &[u8]) -> Result<usize> {
        self.decode_groups(dst, src, None)
    }

    /// Decode `src` into `dst`, trusting a declared count of `bits`
    /// significant bits instead of the symbol-count heuristic.
    ///
    /// Each full group consumes 8 symbols and emits
    /// `ceil(min(remaining, 40) / 8)` bytes, so packed fields whose length
    /// is not a whole number of bytes reconstruct exactly.
    ///
    /// # Errors
    /// Returns [`Error::CorruptInput`] as for [`decode_into`](Self::decode_into).
    ///
    /// # Panics
    /// Panics if `dst` is shorter than [`decoded_len`](Self::decoded_len)
    /// of `src.len()`.
    pub fn decode_bits_into(&self, dst: &mut [u8], src: &[u8], bits: usize) -> Result<usize> {
        self.decode_groups(dst, src, Some(bits))
    }

    /// Decode a byte-aligned string into a freshly allocated buffer.
    ///
    /// # Errors
    /// Returns [`Error::CorruptInput`] on the first byte outside the
    /// alphabet; no partial output is returned.
    pub fn decode(&self, src: &str) -> Result<Vec<u8>> {
        let mut buffer = vec![0; self.decoded_len(src.len())];
        let n = self.decode_into(&mut buffer, src.as_bytes())?;
        buffer.truncate(n);

        Ok(buffer)
    }

    /// Decode a string holding exactly `bits` significant bits.
    ///
    /// # Errors
    /// Returns [`Error::CorruptInput`] on the first byte outside the
    /// alphabet; no partial output is returned.
    pub fn decode_bits(&self, src: &str, bits: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0; self.decoded_len(src.len())];
        let n = self.decode_bits_into(&mut buffer, src.as_bytes(), bits)?;
        buffer.truncate(n);

        Ok(buffer)
    }
}
