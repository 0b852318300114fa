//! Incremental encoder and decoder over `std::io`.
//!
//! Both adapters delegate all bit arithmetic to the whole-buffer codec in
//! [`crate::codec`]; their job is purely the buffering discipline needed to
//! cut an arbitrary chunked stream into whole 5-byte / 8-symbol groups.
//!
//! # Example
//! ```
//! use std::io::Write;
//! use rock32_core::{StreamEncoder, STD_ENCODING};
//!
//! let mut enc = StreamEncoder::new(&STD_ENCODING, Vec::new());
//! enc.write_all(&[0x34, 0x5A]).unwrap();
//! let out = enc.finish().unwrap();
//! assert_eq!(out, b"GTPY");
//! ```

use std::io::{self, Read, Write};

use crate::encoding::Encoding;

/// Staging buffer for encoded output, in symbols. One flush to the sink
/// covers up to `STAGE_SYMBOLS / 8 * 5` source bytes.
const STAGE_SYMBOLS: usize = 1024;

/// Encoded bytes pulled from the source per decoder refill.
const CHUNK_SYMBOLS: usize = 640;

/// Decoded capacity of one refill chunk.
const CHUNK_BYTES: usize = CHUNK_SYMBOLS / 8 * 5;

/// Encodes a byte stream into rock32 text written to an inner sink.
///
/// Bytes are accepted in arbitrary-sized writes; output reaches the sink
/// only in whole staged groups, never one symbol at a time. Up to 4 bytes
/// of *fringe* (an incomplete final group) are held between writes and
/// emitted by [`finish`](Self::finish).
///
/// The first sink failure is sticky: every subsequent write returns the
/// same error without touching the sink again.
pub struct StreamEncoder<'a, W: Write> {
    encoding: &'a Encoding,
    writer: W,
    /// Pending unencoded fringe, `nbuffer` bytes valid.
    buffer: [u8; 5],
    nbuffer: usize,
    /// Staging area for encoded symbols between codec and sink.
    output: [u8; STAGE_SYMBOLS],
    /// First sink failure, replayed on every later call.
    error: Option<(io::ErrorKind, String)>,
}

impl<'a, W: Write> StreamEncoder<'a, W> {
    pub fn new(encoding: &'a Encoding, writer: W) -> Self {
        Self {
            encoding,
            writer,
            buffer: [0; 5],
            nbuffer: 0,
            output: [0; STAGE_SYMBOLS],
            error: None,
        }
    }

    fn replay(&self) -> io::Error {
        match &self.error {
            Some((kind, msg)) => io::Error::new(*kind, msg.clone()),
            None => io::Error::other("stream encoder in unexpected state"),
        }
    }

    fn record(&mut self, err: io::Error) -> io::Error {
        self.error = Some((err.kind(), err.to_string()));
        err
    }

    /// Encode `src` into the staging area and push it to the sink whole.
    fn stage_and_flush(&mut self, src_len: usize) -> io::Result<()> {
        let m = self
            .encoding
            .encode_into(&mut self.output, &self.buffer[..src_len]);
        match self.writer.write_all(&self.output[..m]) {
            Ok(()) => Ok(()),
            Err(e) => Err(self.record(e)),
        }
    }

    /// Encode any remaining fringe, flush it, and return the sink.
    ///
    /// Consuming `self` makes a second finish unrepresentable; dropping the
    /// encoder without calling this loses at most the unencoded fringe.
    pub fn finish(mut self) -> io::Result<W> {
        if self.error.is_some() {
            return Err(self.replay());
        }
        if self.nbuffer > 0 {
            let n = self.nbuffer;
            self.stage_and_flush(n)?;
            self.nbuffer = 0;
        }
        Ok(self.writer)
    }
}

impl<W: Write> Write for StreamEncoder<'_, W> {
    fn write(&mut self, mut p: &[u8]) -> io::Result<usize> {
        if self.error.is_some() {
            return Err(self.replay());
        }

        let mut n = 0;

        // Leading fringe: top up to a full 5-byte group, then flush it.
        if self.nbuffer > 0 {
            let take = p.len().min(5 - self.nbuffer);
            self.buffer[self.nbuffer..self.nbuffer + take].copy_from_slice(&p[..take]);
            self.nbuffer += take;
            n += take;
            p = &p[take..];

            if self.nbuffer < 5 {
                return Ok(n);
            }
            self.stage_and_flush(5)?;
            self.nbuffer = 0;
        }

        // Large interior chunks, whole groups only.
        while p.len() >= 5 {
            let mut nn = STAGE_SYMBOLS / 8 * 5;
            if nn > p.len() {
                nn = p.len() - p.len() % 5;
            }
            let m = self.encoding.encode_into(&mut self.output, &p[..nn]);
            if let Err(e) = self.writer.write_all(&self.output[..m]) {
                return Err(self.record(e));
            }
            n += nn;
            p = &p[nn..];
        }

        // Trailing fringe.
        self.buffer[..p.len()].copy_from_slice(p);
        self.nbuffer = p.len();
        n += p.len();

        Ok(n)
    }

    /// Flush the sink. The fringe stays buffered; only
    /// [`finish`](Self::finish) emits it.
    fn flush(&mut self) -> io::Result<()> {
        if self.error.is_some() {
            return Err(self.replay());
        }
        match self.writer.flush() {
            Ok(()) => Ok(()),
            Err(e) => Err(self.record(e)),
        }
    }
}

/// Decodes rock32 text pulled from an inner source back into bytes.
///
/// Refills run one fixed-size chunk at a time: the source is read until the
/// chunk is full or end-of-stream, so group boundaries never land on a
/// short source read, then the whole chunk is decoded byte-aligned.
/// Corruption surfaces as [`io::ErrorKind::InvalidData`] carrying the codec
/// error. `read` returns `Ok(0)` exactly when the source is exhausted and
/// the internal buffer fully drained.
pub struct StreamDecoder<'a, R: Read> {
    encoding: &'a Encoding,
    reader: R,
    /// Decoded bytes not yet delivered, `nbuffer` bytes valid.
    buffer: [u8; CHUNK_BYTES],
    nbuffer: usize,
    eof: bool,
}

impl<'a, R: Read> StreamDecoder<'a, R> {
    pub fn new(encoding: &'a Encoding, reader: R) -> Self {
        Self {
            encoding,
            reader,
            buffer: [0; CHUNK_BYTES],
            nbuffer: 0,
            eof: false,
        }
    }

    /// Pull and decode one chunk from the source.
    fn refill(&mut self) -> io::Result<()> {
        let mut chunk = [0u8; CHUNK_SYMBOLS];

        let mut filled = 0;
        while filled < CHUNK_SYMBOLS {
            match self.reader.read(&mut chunk[filled..]) {
                Ok(0) => {
                    self.eof = true;
                    break;
                }
                Ok(k) => filled += k,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        self.nbuffer = self
            .encoding
            .decode_into(&mut self.buffer, &chunk[..filled])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(())
    }
}

impl<R: Read> Read for StreamDecoder<'_, R> {
    fn read(&mut self, p: &mut [u8]) -> io::Result<usize> {
        if self.nbuffer == 0 && !self.eof {
            self.refill()?;
        }

        // Serve from the front of the buffer, compacting the rest forward.
        let n = p.len().min(self.nbuffer);
        p[..n].copy_from_slice(&self.buffer[..n]);
        self.buffer.copy_within(n..self.nbuffer, 0);
        self.nbuffer -= n;

        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{LWR_ENCODING, STD_ENCODING};

    /// A reader that hands out at most `step` bytes per call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, p: &mut [u8]) -> io::Result<usize> {
            let n = p.len().min(self.step).min(self.data.len());
            p[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    /// A sink that fails after accepting a fixed number of writes.
    struct FailAfter {
        remaining: usize,
    }

    impl Write for FailAfter {
        fn write(&mut self, p: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink gone"));
            }
            self.remaining -= 1;
            Ok(p.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i as u8).wrapping_mul(151).wrapping_add(7)).collect()
    }

    #[test]
    fn test_encoder_matches_whole_buffer_for_every_chunk_size() {
        for enc in [&STD_ENCODING, &LWR_ENCODING] {
            let data = sample(257);
            let expected = enc.encode(&data);

            for chunk in 1..128 {
                let mut stream = StreamEncoder::new(enc, Vec::new());
                for piece in data.chunks(chunk) {
                    stream.write_all(piece).unwrap();
                }
                let out = stream.finish().unwrap();
                assert_eq!(String::from_utf8(out).unwrap(), expected, "chunk size {chunk}");
            }
        }
    }

    #[test]
    fn test_encoder_empty_input_emits_nothing() {
        let stream = StreamEncoder::new(&STD_ENCODING, Vec::new());
        assert!(stream.finish().unwrap().is_empty());
    }

    #[test]
    fn test_encoder_interior_chunks_span_multiple_stages() {
        // Larger than one staging flush (640 source bytes) in a single write.
        let data = sample(2000);
        let mut stream = StreamEncoder::new(&STD_ENCODING, Vec::new());
        stream.write_all(&data).unwrap();
        let out = stream.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), STD_ENCODING.encode(&data));
    }

    #[test]
    fn test_encoder_error_is_sticky() {
        let mut stream = StreamEncoder::new(&STD_ENCODING, FailAfter { remaining: 1 });
        stream.write_all(&sample(640)).unwrap();

        let first = stream.write(&sample(640)).unwrap_err();
        assert_eq!(first.kind(), io::ErrorKind::BrokenPipe);

        // Sink would now accept writes again, but the encoder must not try.
        let second = stream.write(&[1, 2, 3]).unwrap_err();
        assert_eq!(second.kind(), io::ErrorKind::BrokenPipe);
        assert!(stream.finish().is_err());
    }

    #[test]
    fn test_decoder_matches_whole_buffer_for_every_chunk_size() {
        for enc in [&STD_ENCODING, &LWR_ENCODING] {
            let data = sample(257);
            let text = enc.encode(&data);

            for chunk in 1..128 {
                let mut stream = StreamDecoder::new(enc, text.as_bytes());
                let mut out = Vec::new();
                let mut buf = vec![0u8; chunk];
                loop {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    out.extend_from_slice(&buf[..n]);
                }
                assert_eq!(out, data, "chunk size {chunk}");
            }
        }
    }

    #[test]
    fn test_decoder_tolerates_short_source_reads() {
        // Source reads that stop mid-group must not corrupt the output.
        let data = sample(991);
        let text = STD_ENCODING.encode(&data);

        for step in [1, 3, 7, 639] {
            let source = Trickle {
                data: text.as_bytes(),
                step,
            };
            let mut stream = StreamDecoder::new(&STD_ENCODING, source);
            let mut out = Vec::new();
            stream.read_to_end(&mut out).unwrap();
            assert_eq!(out, data, "source step {step}");
        }
    }

    #[test]
    fn test_decoder_reports_corruption_as_invalid_data() {
        let mut stream = StreamDecoder::new(&STD_ENCODING, &b"F00!BAR"[..]);
        let mut out = Vec::new();
        let err = stream.read_to_end(&mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("input byte 3"));
    }

    #[test]
    fn test_decoder_empty_source_is_immediate_eof() {
        let mut stream = StreamDecoder::new(&STD_ENCODING, io::empty());
        let mut buf = [0u8; 16];
        assert_eq!(stream.read(&mut buf).unwrap(), 0);
        assert_eq!(stream.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_round_trip_through_both_adapters() {
        let data = sample(4096);
        let mut encoder = StreamEncoder::new(&LWR_ENCODING, Vec::new());
        encoder.write_all(&data).unwrap();
        let text = encoder.finish().unwrap();

        let mut decoder = StreamDecoder::new(&LWR_ENCODING, text.as_slice());
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).unwrap();
        assert_eq!(out, data);
    }
}
