//! LZ4 block-format constants and byte-read helpers.
//!
//! Sequence layout and parsing restrictions follow
//! `doc/lz4_Block_format.md` from the LZ4 reference distribution.

// ─────────────────────────────────────────────────────────────────────────────
// Sequence constants
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum match length encoded in an LZ4 block.
pub const MINMATCH: usize = 4;

/// Last N bytes of a block are always emitted as literals.
/// See doc/lz4_Block_format.md#parsing-restrictions.
pub const LASTLITERALS: usize = 5;

/// The last match must start at least this many bytes before the block end.
/// See doc/lz4_Block_format.md#parsing-restrictions.
pub const MFLIMIT: usize = 12;

pub const ML_BITS: u32 = 4;
pub const ML_MASK: u32 = (1u32 << ML_BITS) - 1;
pub const RUN_BITS: u32 = 8 - ML_BITS;
pub const RUN_MASK: u32 = (1u32 << RUN_BITS) - 1;

// ─────────────────────────────────────────────────────────────────────────────
// Byte-read helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a little-endian `u16` from `src` at byte `offset`.
///
/// Returns `None` when fewer than two bytes remain.
#[inline]
pub fn read_le16(src: &[u8], offset: usize) -> Option<u16> {
    let bytes = src.get(offset..offset.checked_add(2)?)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}
