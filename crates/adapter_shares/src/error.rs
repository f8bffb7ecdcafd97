//! Share-map adapter errors.

use thiserror::Error;

/// Errors that can occur while parsing or decoding a share map.
#[derive(Error, Debug)]
pub enum ShareError {
    /// Input was not valid JSON
    #[error("Share map is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The `keys` header entry was missing
    #[error("Share map is missing the \"keys\" header")]
    MissingHeader,

    /// A share key was not a numeric index
    #[error("Share key {0:?} is not a numeric index")]
    InvalidKey(String),

    /// A share declared a base outside the supported range
    #[error("Share {index} declares unsupported base {base:?} (expected 2..=36)")]
    InvalidBase {
        /// Share index
        index: u64,
        /// Declared base, as written in the input
        base: String,
    },

    /// A share value could not be parsed in its declared base
    #[error("Share {index} value {value:?} is not a base-{base} integer")]
    InvalidDigit {
        /// Share index
        index: u64,
        /// Declared base
        base: u32,
        /// Offending value string
        value: String,
    },

    /// Fewer shares were present than the quorum requires
    #[error("Not enough shares: got {got}, need {need}")]
    NotEnoughShares {
        /// Number of shares present
        got: usize,
        /// Quorum declared in the header
        need: usize,
    },
}
