// prefs.rs: Runtime preferences for the file-level operations.
//
// Built by the CLI from parsed arguments and passed by reference to the
// operations in `crate::io`; there is no global preferences state.

use crate::config::MAX_INPUT_SIZE_DEFAULT;
use crate::decode::DecodeLimits;

/// Options controlling how files are read, decoded and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefs {
    /// Replace an existing destination file. Default: true.
    pub overwrite: bool,
    /// Largest accepted input file, in bytes. Default: 128 MiB.
    pub max_input_size: u64,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            overwrite: true,
            max_input_size: MAX_INPUT_SIZE_DEFAULT,
        }
    }
}

impl Prefs {
    /// Creates a new `Prefs` with all defaults applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables destination-file overwrite. Returns the new value.
    pub fn set_overwrite(&mut self, yes: bool) -> bool {
        self.overwrite = yes;
        yes
    }

    /// Sets the input ceiling. Returns the value stored.
    pub fn set_max_input_size(&mut self, bytes: u64) -> u64 {
        self.max_input_size = bytes;
        bytes
    }

    /// Decode limits derived from these preferences.
    pub fn limits(&self) -> DecodeLimits {
        DecodeLimits {
            max_input_size: self.max_input_size,
        }
    }
}
