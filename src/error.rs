use thiserror::Error;

use crate::models::ECLevel;

/// Result alias used by every public encode/render entry point.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors raised while turning input text into a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Numeric input is too long for any version 1-40 at this level.
    #[error("{digits} digits do not fit any QR version at error correction level {ec_level}")]
    CapacityExceeded {
        /// Number of digits requested
        digits: usize,
        /// Requested error correction level
        ec_level: ECLevel,
    },

    /// A non-digit character was passed to a digit-only encoder.
    #[error("invalid digit {character:?} at position {position}")]
    InvalidDigit {
        /// Character index in the input
        position: usize,
        /// Offending character
        character: char,
    },

    /// Fixed-length symbology received the wrong number of digits.
    #[error("{symbology} expects {expected} digits, got {actual}")]
    InvalidLength {
        /// Symbology name
        symbology: &'static str,
        /// Accepted length(s), human readable
        expected: &'static str,
        /// Supplied length
        actual: usize,
    },

    /// Caller supplied a check digit that does not match the data.
    #[error("{symbology} check digit mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// Symbology name
        symbology: &'static str,
        /// Computed check digit
        expected: u8,
        /// Supplied check digit
        actual: u8,
    },

    /// Character that Code 128 cannot represent.
    #[error("unsupported character {character:?} at position {position}")]
    UnsupportedCharacter {
        /// Character index in the input
        position: usize,
        /// Offending character
        character: char,
    },
}
