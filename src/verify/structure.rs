//! Structural VIN rules, excluding the check digit arithmetic.

use thiserror::Error;

use crate::core::Vin;

/// VIN length for model years 1981 onwards.
pub const VIN_LENGTH: usize = 17;

/// Characters prohibited in every position (confusable with 1 and 0).
pub const PROHIBITED_CHARACTERS: [char; 3] = ['I', 'O', 'Q'];

/// Characters never used as a model year code.
///
/// Some 1980 Ford and AMC vehicles carry one of these anyway and are
/// rejected as a known false negative.
pub const PROHIBITED_YEAR_CODES: [char; 3] = ['U', 'Z', '0'];

/// The first structural rule a VIN breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StructureViolation {
    /// The VIN is not exactly 17 characters long.
    #[error("VIN must be 17 characters, got {actual}")]
    Length { actual: usize },

    /// An I, O or Q appears somewhere in the VIN.
    #[error("character '{character}' at position {position} is not allowed in a VIN")]
    ProhibitedCharacter { character: char, position: usize },

    /// Position 10 holds U, Z or 0.
    #[error("'{character}' is not a valid model year code")]
    InvalidYearCode { character: char },

    /// Position 9 is neither a digit nor X.
    #[error("check digit must be 0-9 or X, got '{character}'")]
    InvalidCheckDigitCharacter { character: char },
}

/// Check the structural rules in order, stopping at the first failure.
///
/// The input is uppercased but not trimmed. The check digit value itself
/// is not verified; see [`verify_checksum`](super::verify_checksum).
pub fn validate_structure(raw: &str) -> Result<(), StructureViolation> {
    Vin::new(raw).validate_structure()
}

/// Whether a VIN passes all structural rules.
pub fn is_valid_vin(raw: &str) -> bool {
    Vin::new(raw).is_valid()
}

impl Vin {
    /// See [`validate_structure`].
    pub fn validate_structure(&self) -> Result<(), StructureViolation> {
        let chars: Vec<char> = self.as_str().chars().collect();

        if chars.len() != VIN_LENGTH {
            return Err(StructureViolation::Length {
                actual: chars.len(),
            });
        }

        if let Some((position, &character)) = chars
            .iter()
            .enumerate()
            .find(|(_, c)| PROHIBITED_CHARACTERS.contains(c))
        {
            return Err(StructureViolation::ProhibitedCharacter {
                character,
                position,
            });
        }

        let year_code = chars[9];
        if PROHIBITED_YEAR_CODES.contains(&year_code) {
            return Err(StructureViolation::InvalidYearCode {
                character: year_code,
            });
        }

        let check = chars[8];
        if !(check.is_ascii_digit() || check == 'X') {
            return Err(StructureViolation::InvalidCheckDigitCharacter { character: check });
        }

        Ok(())
    }

    /// See [`is_valid_vin`].
    pub fn is_valid(&self) -> bool {
        match self.validate_structure() {
            Ok(()) => true,
            Err(violation) => {
                tracing::debug!(vin = %self, %violation, "structural validation failed");
                false
            }
        }
    }
}
