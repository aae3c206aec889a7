// unmoz: decoder for Mozilla mozLz40 containers

pub mod config;
pub mod block;
pub mod container;
pub mod integrity;
pub mod decode;
pub mod error;
pub mod io;
pub mod cli;

// ── Version ───────────────────────────────────────────────────────────────────
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::{BlockDecoder, DecompressError, FastDecoder};
pub use container::{parse, parse_with_limit, Container, ContainerHeader, ParseError, MAGIC};
pub use decode::{
    decode, decode_with, decompress, DecodeError, DecodeLimits, DecodeReport, DecodeStage,
    Decoded, DecodedOutput,
};
pub use error::UnmozError;
pub use integrity::{verify, IntegrityError};
