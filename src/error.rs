//! Errors surfaced by the file-level operations, and their exit codes.
//!
//! Each failure kind maps to its own non-zero process exit code so scripts can
//! tell a wrong file from a truncated or corrupt one.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::decode::DecodeError;

// ── Exit codes ────────────────────────────────────────────────────────────────
pub const EXIT_IO: i32 = 1;
/// Matches the exit code clap uses for argument errors.
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_INPUT_SIZE: i32 = 3;
pub const EXIT_MAGIC_MISMATCH: i32 = 4;
pub const EXIT_DECOMPRESS: i32 = 5;
pub const EXIT_LENGTH_MISMATCH: i32 = 6;

/// A failed file-level operation.
#[derive(Debug)]
pub enum UnmozError {
    /// A filesystem call failed; `op` names what was being attempted.
    Io {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    /// The input was read but is not a decodable container.
    Decode { path: PathBuf, source: DecodeError },
    /// Input and output name the same file.
    SameFile { path: PathBuf },
    /// The output exists and replacing it was not allowed.
    OutputExists { path: PathBuf },
    /// No output was given and none could be derived from the input name.
    NoOutputName { path: PathBuf },
}

impl UnmozError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        UnmozError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(path: impl Into<PathBuf>, source: impl Into<DecodeError>) -> Self {
        UnmozError::Decode {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            UnmozError::Io { .. } | UnmozError::SameFile { .. } | UnmozError::OutputExists { .. } => {
                EXIT_IO
            }
            UnmozError::NoOutputName { .. } => EXIT_USAGE,
            UnmozError::Decode { source, .. } => match source {
                DecodeError::InputSize(_) => EXIT_INPUT_SIZE,
                DecodeError::MagicMismatch(_) => EXIT_MAGIC_MISMATCH,
                DecodeError::ImplausibleSize { .. } | DecodeError::Decompress { .. } => {
                    EXIT_DECOMPRESS
                }
                DecodeError::LengthMismatch(_) => EXIT_LENGTH_MISMATCH,
            },
        }
    }

    /// The decode failure, if this is one.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            UnmozError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for UnmozError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmozError::Io { op, path, source } => {
                write!(f, "{}: cannot {op}: {source}", path.display())
            }
            UnmozError::Decode { path, source } => write!(f, "{}: {source}", path.display()),
            UnmozError::SameFile { path } => {
                write!(f, "{}: input and output are the same file", path.display())
            }
            UnmozError::OutputExists { path } => {
                write!(f, "{}: already exists; not overwritten", path.display())
            }
            UnmozError::NoOutputName { path } => write!(
                f,
                "{}: cannot determine an output filename (name does not end in \"lz4\")",
                path.display()
            ),
        }
    }
}

impl std::error::Error for UnmozError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UnmozError::Io { source, .. } => Some(source),
            UnmozError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}
