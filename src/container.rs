//! mozLz40 container header parsing.
//!
//! A container is laid out as:
//!
//! | Offset | Length | Field           |
//! |--------|--------|-----------------|
//! | 0      | 8      | magic `"mozLz40\0"` |
//! | 8      | 4      | decompressed size, `u32` little-endian |
//! | 12     | N      | one raw LZ4 block |
//!
//! Parsing is pure: it borrows the input and never allocates.  The payload is
//! not inspected here; the block decoder and the consumption check decide
//! whether it is valid.

use std::fmt;

use crate::config::MAX_INPUT_SIZE_DEFAULT;

// ─────────────────────────────────────────────────────────────────────────────
// Format constants
// ─────────────────────────────────────────────────────────────────────────────

/// Magic tag: ASCII `mozLz40` followed by a mandatory NUL byte.
pub const MAGIC: [u8; 8] = *b"mozLz40\0";

/// Byte length of the magic tag.
pub const MAGIC_SIZE: usize = MAGIC.len();

/// Byte length of the decompressed-size field.
pub const SIZE_FIELD_SIZE: usize = 4;

/// Total header length; the payload starts at this offset.
pub const HEADER_SIZE: usize = MAGIC_SIZE + SIZE_FIELD_SIZE;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Reasons a byte sequence is not an acceptable mozLz40 container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Shorter than the 12-byte header.
    TooSmall { actual: u64 },
    /// Longer than the configured input ceiling.
    TooLarge { actual: u64, limit: u64 },
    /// The first eight bytes are not `"mozLz40\0"`.
    MagicMismatch { found: [u8; MAGIC_SIZE] },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::TooSmall { actual } => write!(
                f,
                "input is {actual} bytes, a mozLz40 container needs at least {HEADER_SIZE}"
            ),
            ParseError::TooLarge { actual, limit } => write!(
                f,
                "input is {actual} bytes, above the {limit} byte limit"
            ),
            ParseError::MagicMismatch { found } => write!(
                f,
                "not a mozLz40 container: magic is \"{}\", expected \"{}\"",
                found.escape_ascii(),
                MAGIC.escape_ascii()
            ),
        }
    }
}

impl std::error::Error for ParseError {}

// ─────────────────────────────────────────────────────────────────────────────
// Parsed views
// ─────────────────────────────────────────────────────────────────────────────

/// The fixed-size header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Exact byte length of the decompressed payload.
    pub declared_size: u32,
}

/// A validated container borrowing its payload from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container<'a> {
    pub header: ContainerHeader,
    /// Offset of the payload within the container (always [`HEADER_SIZE`]).
    pub payload_offset: usize,
    /// The compressed LZ4 block.
    pub payload: &'a [u8],
}

impl Container<'_> {
    #[inline]
    pub fn declared_size(&self) -> u32 {
        self.header.declared_size
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Check a container length against the header minimum and `limit`.
///
/// Shared by the parser and by the file layer, which calls it with the size
/// reported by the filesystem before reading anything.
pub fn check_input_size(len: u64, limit: u64) -> Result<(), ParseError> {
    if len < HEADER_SIZE as u64 {
        return Err(ParseError::TooSmall { actual: len });
    }
    if len > limit {
        return Err(ParseError::TooLarge { actual: len, limit });
    }
    Ok(())
}

/// Validate the magic tag and read the declared size.
///
/// Only the first [`HEADER_SIZE`] bytes are examined; no ceiling is applied.
pub fn read_header(bytes: &[u8]) -> Result<ContainerHeader, ParseError> {
    let Some(header) = bytes.get(..HEADER_SIZE) else {
        return Err(ParseError::TooSmall {
            actual: bytes.len() as u64,
        });
    };
    let (magic, size_field) = header.split_at(MAGIC_SIZE);
    if magic != MAGIC {
        let mut found = [0u8; MAGIC_SIZE];
        found.copy_from_slice(magic);
        return Err(ParseError::MagicMismatch { found });
    }
    let declared_size =
        u32::from_le_bytes([size_field[0], size_field[1], size_field[2], size_field[3]]);
    Ok(ContainerHeader { declared_size })
}

/// Parse a container with the default 128 MiB ceiling.
pub fn parse(bytes: &[u8]) -> Result<Container<'_>, ParseError> {
    parse_with_limit(bytes, MAX_INPUT_SIZE_DEFAULT)
}

/// Parse a container, rejecting inputs longer than `max_input_size`.
pub fn parse_with_limit(bytes: &[u8], max_input_size: u64) -> Result<Container<'_>, ParseError> {
    check_input_size(bytes.len() as u64, max_input_size)?;
    let header = read_header(bytes)?;
    Ok(Container {
        header,
        payload_offset: HEADER_SIZE,
        payload: &bytes[HEADER_SIZE..],
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
