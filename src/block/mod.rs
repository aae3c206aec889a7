//! LZ4 block decompression.
//!
//! This module is the codec layer: it knows the LZ4 block format and nothing
//! about the mozLz40 container.  The container pipeline reaches it only
//! through the [`BlockDecoder`] trait, so the decoder can be swapped (tests
//! substitute decoders with scripted results).

pub mod decompress_fast;
pub mod types;

pub use decompress_fast::{decompress_fast, DecompressError};

/// An LZ4 block decoder with "decompress fast" semantics.
///
/// Implementations fill `dst` completely (its length is the exact
/// decompressed size) and return the number of compressed bytes read from
/// `src`, or an error if the block is malformed.
pub trait BlockDecoder {
    fn decompress_fast(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError>;
}

/// The crate's own bounds-checked LZ4 block decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastDecoder;

impl BlockDecoder for FastDecoder {
    #[inline]
    fn decompress_fast(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
        decompress_fast(src, dst)
    }
}

impl<D: BlockDecoder + ?Sized> BlockDecoder for &D {
    #[inline]
    fn decompress_fast(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
        (**self).decompress_fast(src, dst)
    }
}
