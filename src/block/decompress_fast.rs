//! LZ4 block decompression, "fast" variant.
//!
//! The caller supplies the exact decompressed size (`dst.len()`); decoding
//! stops as soon as the output is full and the function reports how many
//! compressed bytes it read to get there.  This is the contract of
//! `LZ4_decompress_fast` in lz4.c, which is what the mozLz40 container was
//! designed around: the container stores the output size, not the input size,
//! so the caller checks the consumed count against the payload length itself.
//!
//! # Bounds
//!
//! Unlike the C primitive, this implementation never trusts the input to be
//! long enough.  Every read from `src` and every write to `dst` is bounds
//! checked, and any inconsistency returns
//! `Err(DecompressError::MalformedInput)` carrying the input position at which
//! decoding stopped.  Malformed input must never panic.

use std::fmt;

use super::types::{read_le16, LASTLITERALS, MFLIMIT, MINMATCH, ML_BITS, ML_MASK, RUN_MASK};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by LZ4 block decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// The compressed data is malformed or truncated, or it does not decode
    /// to exactly the requested output size.  Equivalent to a negative return
    /// value from the C `LZ4_decompress_fast`.
    MalformedInput {
        /// Offset into the compressed input where decoding failed.
        position: usize,
    },
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::MalformedInput { position } => {
                write!(f, "malformed LZ4 block at input offset {position}")
            }
        }
    }
}

impl std::error::Error for DecompressError {}

#[inline(always)]
fn malformed<T>(position: usize) -> Result<T, DecompressError> {
    Err(DecompressError::MalformedInput { position })
}

// ─────────────────────────────────────────────────────────────────────────────
// read_variable_length
// ─────────────────────────────────────────────────────────────────────────────

/// Read the continuation bytes of an extended literal or match length.
///
/// Accumulates bytes until one below 255 is read.  Running off the end of
/// `src`, or a sum that would overflow `usize`, is an error.
#[inline(always)]
fn read_variable_length(src: &[u8], ip: &mut usize) -> Result<usize, DecompressError> {
    let mut length: usize = 0;
    loop {
        let Some(&s) = src.get(*ip) else {
            return malformed(*ip);
        };
        *ip += 1;
        length = match length.checked_add(s as usize) {
            Some(l) => l,
            None => return malformed(*ip),
        };
        if s != 255 {
            return Ok(length);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Match copy
// ─────────────────────────────────────────────────────────────────────────────

/// Copy `len` bytes starting `offset` bytes behind `op` to `op`.
///
/// When the source and destination overlap (`offset < len`) the copy must run
/// forward one byte at a time so that freshly written bytes are replicated;
/// this is how LZ4 encodes runs.
#[inline(always)]
fn copy_match(dst: &mut [u8], op: usize, offset: usize, len: usize) {
    let start = op - offset;
    if offset >= len {
        dst.copy_within(start..start + len, op);
    } else {
        for i in 0..len {
            dst[op + i] = dst[start + i];
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// decompress_fast
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress one LZ4 block into exactly `dst.len()` bytes.
///
/// Returns the number of bytes consumed from `src`.  Bytes of `src` past that
/// point are not examined; detecting trailing garbage is the caller's job.
///
/// A zero-length `dst` is only satisfied by a block consisting of a single
/// `0x00` token (one byte consumed).
pub fn decompress_fast(src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    let oend = dst.len();
    let mut ip: usize = 0;
    let mut op: usize = 0;

    if oend == 0 {
        return match src.first() {
            Some(0) => Ok(1),
            _ => malformed(0),
        };
    }

    loop {
        let Some(&token) = src.get(ip) else {
            return malformed(ip);
        };
        ip += 1;

        // ── Literals ──────────────────────────────────────────────────────────
        let mut lit_length = (token >> ML_BITS) as usize;
        if lit_length == RUN_MASK as usize {
            lit_length += read_variable_length(src, &mut ip)?;
        }
        if oend - op < lit_length {
            // Literal run would overflow the declared output.
            return malformed(ip);
        }
        let lit_end = match ip.checked_add(lit_length) {
            Some(end) if end <= src.len() => end,
            _ => return malformed(ip),
        };
        dst[op..op + lit_length].copy_from_slice(&src[ip..lit_end]);
        ip = lit_end;
        op += lit_length;

        if oend - op < MFLIMIT {
            // Inside the tail region only the final, literal-only sequence may
            // end, and it must end exactly at the output boundary.
            if op == oend {
                break;
            }
            return malformed(ip);
        }

        // ── Match ─────────────────────────────────────────────────────────────
        let Some(offset) = read_le16(src, ip) else {
            return malformed(ip);
        };
        let offset = offset as usize;
        ip += 2;

        let mut match_length = (token & ML_MASK as u8) as usize;
        if match_length == ML_MASK as usize {
            match_length += read_variable_length(src, &mut ip)?;
        }
        match_length += MINMATCH;

        if oend - op < match_length {
            return malformed(ip);
        }
        if offset == 0 || offset > op {
            // Zero offset or a reference before the first output byte.
            return malformed(ip);
        }
        copy_match(dst, op, offset, match_length);
        op += match_length;

        if oend - op < LASTLITERALS {
            // The last LASTLITERALS bytes of a block must be literals.
            return malformed(ip);
        }
    }

    Ok(ip)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
