use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::VinError;

/// A Vehicle Identification Number.
///
/// Construction only uppercases the input. Length and alphabet are not
/// checked here, so malformed input is representable and is rejected
/// only by [`Vin::validate_structure`] or [`Vin::verify_checksum`].
///
/// All fields are derived on access; positions are counted in characters,
/// never bytes, so non-ASCII input cannot cause a panic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    /// Create a VIN from raw input, uppercasing it.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_uppercase())
    }

    /// The normalized VIN text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the VIN is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// World Manufacturer Identifier, positions 1-3.
    pub fn wmi(&self) -> Result<&str, VinError> {
        self.slice("wmi", 0, 3)
    }

    /// Vehicle Descriptor Section, positions 4-9 (includes the check digit).
    pub fn vds(&self) -> Result<&str, VinError> {
        self.slice("vds", 3, 9)
    }

    /// Vehicle Identifier Sequence, the last 8 characters.
    pub fn vis(&self) -> Result<&str, VinError> {
        self.tail("vis", 8)
    }

    /// The check digit character at position 9.
    pub fn check_digit(&self) -> Result<char, VinError> {
        self.char_at("check digit", 8)
    }

    /// The model year code at position 10.
    pub fn model_year_code(&self) -> Result<char, VinError> {
        self.char_at("model year code", 9)
    }

    /// A manufacturer building fewer than 500 vehicles per year uses `9`
    /// as the third character. Any other character, digit or not, means
    /// a regular manufacturer.
    pub fn less_than_500_built_per_year(&self) -> Result<bool, VinError> {
        Ok(self.char_at("manufacturer size", 2)? == '9')
    }

    /// Vehicle sequential number: last 3 characters for low-volume
    /// manufacturers, last 6 otherwise.
    pub fn sequential_number(&self) -> Result<&str, VinError> {
        if self.less_than_500_built_per_year()? {
            self.tail("sequential number", 3)
        } else {
            self.tail("sequential number", 6)
        }
    }

    /// Character at zero-based position `index`.
    pub(crate) fn char_at(&self, field: &'static str, index: usize) -> Result<char, VinError> {
        self.0
            .chars()
            .nth(index)
            .ok_or_else(|| VinError::MalformedInput {
                field,
                required: index + 1,
                actual: self.len(),
            })
    }

    fn slice(&self, field: &'static str, start: usize, end: usize) -> Result<&str, VinError> {
        let actual = self.len();
        if actual < end {
            return Err(VinError::MalformedInput {
                field,
                required: end,
                actual,
            });
        }
        let byte_at = |n: usize| {
            self.0
                .char_indices()
                .nth(n)
                .map_or(self.0.len(), |(offset, _)| offset)
        };
        Ok(&self.0[byte_at(start)..byte_at(end)])
    }

    fn tail(&self, field: &'static str, count: usize) -> Result<&str, VinError> {
        let actual = self.len();
        if actual < count {
            return Err(VinError::MalformedInput {
                field,
                required: count,
                actual,
            });
        }
        self.slice(field, actual - count, actual)
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Vin {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Vin {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}

impl FromStr for Vin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
