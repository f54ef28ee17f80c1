use thiserror::Error;

use crate::year::YearCycle;

/// Errors that can occur while decoding a VIN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VinError {
    /// The input is too short to contain the requested field.
    #[error("malformed VIN: {field} needs {required} characters, got {actual}")]
    MalformedInput {
        /// Name of the field being extracted (e.g. "wmi").
        field: &'static str,
        /// Minimum number of characters the extraction needs.
        required: usize,
        /// Number of characters actually present.
        actual: usize,
    },

    /// The first character has no entry in the world manufacturer table.
    #[error("unknown world manufacturer code '{0}'")]
    UnknownOriginCode(char),

    /// The model year character is absent from the selected year table.
    #[error("unknown model year code '{code}' for {cycle} cycle")]
    UnknownYearCode {
        /// The character found at position 10.
        code: char,
        /// The 30-year cycle selected by position 7.
        cycle: YearCycle,
    },

    /// A character cannot be transliterated into a check digit weight.
    #[error("character '{character}' at position {position} has no check digit value")]
    InvalidCheckCharacter {
        /// The offending character.
        character: char,
        /// Zero-based position in the normalized VIN.
        position: usize,
    },

    /// JSON serialization failed.
    #[cfg(feature = "json")]
    #[error("serialization error: {0}")]
    Serialization(String),
}
