//! Random sources used to seed a [`Generator`](crate::Generator).

use std::io::{self, Read};

use rand::rngs::OsRng;
use rand::RngCore;

/// Supplies the bytes a generator is seeded from.
///
/// The default is [`OsEntropy`]. Tests swap in a [`ReaderEntropy`] over a
/// fixed buffer to get deterministic identifiers.
pub trait EntropySource {
    /// Fills `buf` completely or fails.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the source cannot supply `buf.len()` bytes.
    fn fill_seed(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_seed(&mut self, buf: &mut [u8]) -> io::Result<()> {
        OsRng.try_fill_bytes(buf).map_err(io::Error::other)
    }
}

/// Adapts any byte stream into an entropy source.
#[derive(Debug)]
pub struct ReaderEntropy<R> {
    reader: R,
}

impl<R: Read> ReaderEntropy<R> {
    /// Wraps `reader`; each seed consumes the next bytes of the stream.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the wrapped reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> EntropySource for ReaderEntropy<R> {
    fn fill_seed(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.reader.read_exact(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::{EntropySource, OsEntropy, ReaderEntropy};

    #[test]
    fn os_entropy_fills_buffer() {
        let mut a = [0u8; 24];
        let mut b = [0u8; 24];
        OsEntropy.fill_seed(&mut a).unwrap();
        OsEntropy.fill_seed(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn reader_entropy_consumes_stream_in_order() {
        let data: Vec<u8> = (0u8..8).collect();
        let mut source = ReaderEntropy::new(data.as_slice());
        let mut first = [0u8; 4];
        let mut second = [0u8; 4];
        source.fill_seed(&mut first).unwrap();
        source.fill_seed(&mut second).unwrap();
        assert_eq!(first, [0, 1, 2, 3]);
        assert_eq!(second, [4, 5, 6, 7]);
        assert!(source.into_inner().is_empty());
    }

    #[test]
    fn reader_entropy_rejects_short_stream() {
        let mut source = ReaderEntropy::new(&[1u8, 2, 3][..]);
        let mut buf = [0u8; 24];
        let err = source.fill_seed(&mut buf).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
