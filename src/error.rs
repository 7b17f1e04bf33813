//! Unified error type for the PawTrack core.
//!
//! The care operations surface exactly one failure mode: an unknown
//! animal identifier. Everything else an external caller can throw at
//! the core (an unrecognised action kind, a counter already at its
//! daily cap, a blank note) is defined behaviour: a silent no-op that
//! returns the unchanged record, not an error.

use std::fmt;

/// Every fallible care operation funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested animal identifier is not in the registry.
    NotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "no animal registered with id '{id}'"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;
