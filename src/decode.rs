//! The mozLz40 decode pipeline.
//!
//! ```text
//! Start ──parse──▶ HeaderParsed ──decompress──▶ Decompressed ──verify──▶ Verified ──▶ Done
//!   │                   │                           │
//!   └───────────────────┴───────────────────────────┴──▶ Err(DecodeError)
//! ```
//!
//! Each step runs once; the first failure ends the pipeline.  Nothing here
//! touches the filesystem and nothing survives a call: the input is borrowed
//! and the output buffer is created, filled and moved out in one invocation.

use std::fmt;

use crate::block::{BlockDecoder, DecompressError, FastDecoder};
use crate::config::MAX_INPUT_SIZE_DEFAULT;
use crate::container::{self, ParseError};
use crate::displaylevel;
use crate::integrity::{self, IntegrityError};

/// Upper bound on LZ4 expansion: no input byte can produce more than 255
/// output bytes, so a larger declared size cannot be satisfied.
const MAX_EXPANSION_RATIO: u64 = 255;

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// Pipeline position.  An error reports the last stage that was completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DecodeStage {
    Start,
    HeaderParsed,
    Decompressed,
    Verified,
    Done,
}

/// Runtime limits applied while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Largest accepted container, in bytes.
    pub max_input_size: u64,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        DecodeLimits {
            max_input_size: MAX_INPUT_SIZE_DEFAULT,
        }
    }
}

/// Decoded bytes, exactly `declared_size` long.  Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedOutput(Vec<u8>);

impl DecodedOutput {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Release the buffer to the caller.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for DecodedOutput {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Result of the decompression step, before the consumption check.
#[derive(Debug)]
pub struct Decompressed {
    pub output: DecodedOutput,
    /// Compressed bytes the block decoder read.
    pub consumed: usize,
}

/// Figures describing a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeReport {
    pub declared_size: u32,
    pub payload_len: usize,
    pub consumed: usize,
}

impl DecodeReport {
    /// Total container length (header + payload).
    pub fn container_len(&self) -> usize {
        container::HEADER_SIZE + self.payload_len
    }
}

/// A verified decode.
#[derive(Debug)]
pub struct Decoded {
    pub output: DecodedOutput,
    pub report: DecodeReport,
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Why a container could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The container is shorter than its header or above the input ceiling.
    InputSize(ParseError),
    /// The container does not start with `"mozLz40\0"`.
    MagicMismatch(ParseError),
    /// The declared size exceeds what the payload could ever expand to.
    ImplausibleSize { declared_size: u32, payload_len: usize },
    /// The LZ4 block is corrupt or truncated.
    Decompress { declared_size: u32, source: DecompressError },
    /// The block decoded but did not consume exactly the payload.
    LengthMismatch(IntegrityError),
}

impl DecodeError {
    /// The last pipeline stage completed before the failure.
    pub fn stage(&self) -> DecodeStage {
        match self {
            DecodeError::InputSize(_) | DecodeError::MagicMismatch(_) => DecodeStage::Start,
            DecodeError::ImplausibleSize { .. } | DecodeError::Decompress { .. } => {
                DecodeStage::HeaderParsed
            }
            DecodeError::LengthMismatch(_) => DecodeStage::Decompressed,
        }
    }

    /// `true` for failures reported by (or instead of) the block decoder.
    pub fn is_decompress_failure(&self) -> bool {
        matches!(
            self,
            DecodeError::ImplausibleSize { .. } | DecodeError::Decompress { .. }
        )
    }
}

impl From<ParseError> for DecodeError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::TooSmall { .. } | ParseError::TooLarge { .. } => DecodeError::InputSize(e),
            ParseError::MagicMismatch { .. } => DecodeError::MagicMismatch(e),
        }
    }
}

impl From<IntegrityError> for DecodeError {
    fn from(e: IntegrityError) -> Self {
        DecodeError::LengthMismatch(e)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InputSize(e) | DecodeError::MagicMismatch(e) => fmt::Display::fmt(e, f),
            DecodeError::ImplausibleSize { declared_size, payload_len } => write!(
                f,
                "declared size {declared_size} cannot be produced from a {payload_len} byte payload"
            ),
            DecodeError::Decompress { declared_size, source } => write!(
                f,
                "decompression to {declared_size} bytes failed: {source}"
            ),
            DecodeError::LengthMismatch(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::InputSize(e) | DecodeError::MagicMismatch(e) => Some(e),
            DecodeError::ImplausibleSize { .. } => None,
            DecodeError::Decompress { source, .. } => Some(source),
            DecodeError::LengthMismatch(e) => Some(e),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Block decompression step
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress `payload` into a fresh `declared_size`-byte buffer with the
/// crate's [`FastDecoder`].
pub fn decompress(payload: &[u8], declared_size: u32) -> Result<Decompressed, DecodeError> {
    decompress_with(&FastDecoder, payload, declared_size)
}

/// Decompress `payload` with `decoder`.
///
/// The output is zero-filled before the decoder runs.  An empty payload with a
/// zero declared size is the degenerate empty container and yields an empty
/// output without calling the decoder.
pub fn decompress_with<D: BlockDecoder>(
    decoder: &D,
    payload: &[u8],
    declared_size: u32,
) -> Result<Decompressed, DecodeError> {
    if declared_size == 0 && payload.is_empty() {
        return Ok(Decompressed {
            output: DecodedOutput(Vec::new()),
            consumed: 0,
        });
    }
    if u64::from(declared_size) > (payload.len() as u64).saturating_mul(MAX_EXPANSION_RATIO) {
        return Err(DecodeError::ImplausibleSize {
            declared_size,
            payload_len: payload.len(),
        });
    }
    let len = usize::try_from(declared_size).map_err(|_| DecodeError::ImplausibleSize {
        declared_size,
        payload_len: payload.len(),
    })?;

    let mut buf = vec![0u8; len];
    let consumed = decoder
        .decompress_fast(payload, &mut buf)
        .map_err(|source| DecodeError::Decompress {
            declared_size,
            source,
        })?;
    Ok(Decompressed {
        output: DecodedOutput(buf),
        consumed,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Full pipeline
// ─────────────────────────────────────────────────────────────────────────────

/// Decode a complete container with default limits.
pub fn decode(container_bytes: &[u8]) -> Result<DecodedOutput, DecodeError> {
    decode_with(container_bytes, &DecodeLimits::default(), &FastDecoder).map(|d| d.output)
}

/// Decode a complete container: parse, decompress, verify.
pub fn decode_with<D: BlockDecoder>(
    container_bytes: &[u8],
    limits: &DecodeLimits,
    decoder: &D,
) -> Result<Decoded, DecodeError> {
    let mut stage = DecodeStage::Start;

    let parsed = container::parse_with_limit(container_bytes, limits.max_input_size)?;
    advance(&mut stage, DecodeStage::HeaderParsed);
    displaylevel!(
        4,
        "magic {:02x?}, size field {:02x?}\n",
        &container_bytes[..container::MAGIC_SIZE],
        &container_bytes[container::MAGIC_SIZE..container::HEADER_SIZE]
    );
    displaylevel!(
        4,
        "declared size = {} bytes, payload = {} bytes\n",
        parsed.declared_size(),
        parsed.payload.len()
    );

    let Decompressed { output, consumed } =
        decompress_with(decoder, parsed.payload, parsed.declared_size())?;
    advance(&mut stage, DecodeStage::Decompressed);
    displaylevel!(4, "decoder consumed {} bytes\n", consumed);

    integrity::verify(consumed, parsed.payload.len())?;
    advance(&mut stage, DecodeStage::Verified);

    let report = DecodeReport {
        declared_size: parsed.declared_size(),
        payload_len: parsed.payload.len(),
        consumed,
    };
    advance(&mut stage, DecodeStage::Done);
    Ok(Decoded { output, report })
}

#[inline]
fn advance(stage: &mut DecodeStage, next: DecodeStage) {
    debug_assert!(next > *stage);
    displaylevel!(5, "{:?} -> {:?}\n", stage, next);
    *stage = next;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
