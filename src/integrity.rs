//! Consumption check between the block decoder and the container.
//!
//! A "decompress fast" decoder is told how many bytes to produce and reports
//! how many compressed bytes it read.  When the container's declared size is
//! wrong the decoder can still succeed, stopping early or reading into bytes
//! that were never part of the block.  The only way to notice is to require
//! that it consumed exactly the payload the container holds.

use std::fmt;

/// The decoder did not consume exactly the available payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityError {
    /// Payload bytes were left over after producing the declared size.
    UnderConsumed { consumed: usize, available: usize },
    /// The decoder reports reading past the end of the payload.
    OverConsumed { consumed: usize, available: usize },
}

impl IntegrityError {
    pub fn consumed(&self) -> usize {
        match *self {
            IntegrityError::UnderConsumed { consumed, .. }
            | IntegrityError::OverConsumed { consumed, .. } => consumed,
        }
    }

    pub fn available(&self) -> usize {
        match *self {
            IntegrityError::UnderConsumed { available, .. }
            | IntegrityError::OverConsumed { available, .. } => available,
        }
    }
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityError::UnderConsumed { consumed, available } => write!(
                f,
                "decoder consumed {consumed} of {available} payload bytes \
                 ({} trailing bytes): declared size does not match the payload",
                available - consumed
            ),
            IntegrityError::OverConsumed { consumed, available } => write!(
                f,
                "decoder consumed {consumed} bytes but the payload holds only {available}: \
                 payload is truncated or the declared size is wrong"
            ),
        }
    }
}

impl std::error::Error for IntegrityError {}

/// Require `consumed_bytes == available_payload_len`.
pub fn verify(consumed_bytes: usize, available_payload_len: usize) -> Result<(), IntegrityError> {
    use std::cmp::Ordering;

    match consumed_bytes.cmp(&available_payload_len) {
        Ordering::Equal => Ok(()),
        Ordering::Less => Err(IntegrityError::UnderConsumed {
            consumed: consumed_bytes,
            available: available_payload_len,
        }),
        Ordering::Greater => Err(IntegrityError::OverConsumed {
            consumed: consumed_bytes,
            available: available_payload_len,
        }),
    }
}
