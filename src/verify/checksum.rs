//! Weighted modulo-11 check digit (position 9).

use crate::core::{Vin, VinError};

use super::structure::VIN_LENGTH;

/// Positional weights. Position 9 (the check digit itself) weighs 0.
pub const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Transliteration of letters to check digit values. I, O, Q have none.
#[rustfmt::skip]
static LETTER_VALUES: &[(char, u32)] = &[
    ('A', 1), ('B', 2), ('C', 3), ('D', 4), ('E', 5), ('F', 6), ('G', 7), ('H', 8),
    ('J', 1), ('K', 2), ('L', 3), ('M', 4), ('N', 5), ('P', 7), ('R', 9),
    ('S', 2), ('T', 3), ('U', 4), ('V', 5), ('W', 6), ('X', 7), ('Y', 8), ('Z', 9),
];

/// Numeric value of a character for the check digit sum.
///
/// Digits are their own value, letters follow the transliteration table.
/// Returns `None` for I, O, Q, lowercase letters and anything else.
pub fn check_weight(c: char) -> Option<u32> {
    if let Some(digit) = c.to_digit(10) {
        return Some(digit);
    }
    LETTER_VALUES
        .binary_search_by_key(&c, |&(letter, _)| letter)
        .ok()
        .map(|i| LETTER_VALUES[i].1)
}

/// Compute the expected check digit character for a VIN.
///
/// The input is trimmed and uppercased first. Every one of the 17
/// characters must be transliterable, including position 9.
pub fn calculate_check_digit(raw: &str) -> Result<char, VinError> {
    let normalized: Vec<char> = raw.trim().to_uppercase().chars().collect();
    if normalized.len() != VIN_LENGTH {
        return Err(VinError::MalformedInput {
            field: "check digit",
            required: VIN_LENGTH,
            actual: normalized.len(),
        });
    }

    let mut sum = 0;
    for (position, (&character, weight)) in normalized.iter().zip(WEIGHTS).enumerate() {
        let value = check_weight(character).ok_or(VinError::InvalidCheckCharacter {
            character,
            position,
        })?;
        sum += value * weight;
    }

    Ok(match sum % 11 {
        10 => 'X',
        remainder => char::from(b'0' + remainder as u8),
    })
}

/// Verify the check digit of a VIN.
///
/// Trimming and case are ignored. Any input of the wrong length or with a
/// character outside the VIN alphabet is reported as invalid.
pub fn verify_checksum(raw: &str) -> bool {
    let actual = raw.trim().to_uppercase().chars().nth(8);
    match calculate_check_digit(raw) {
        Ok(expected) if Some(expected) == actual => true,
        Ok(expected) => {
            tracing::debug!(vin = raw, %expected, ?actual, "check digit mismatch");
            false
        }
        Err(e) => {
            tracing::debug!(vin = raw, error = %e, "check digit not computable");
            false
        }
    }
}

impl Vin {
    /// See [`calculate_check_digit`].
    pub fn expected_check_digit(&self) -> Result<char, VinError> {
        calculate_check_digit(self.as_str())
    }

    /// See [`verify_checksum`].
    pub fn verify_checksum(&self) -> bool {
        verify_checksum(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_table_is_sorted() {
        for window in LETTER_VALUES.windows(2) {
            assert!(window[0].0 < window[1].0);
        }
    }

    #[test]
    fn transliteration() {
        assert_eq!(check_weight('7'), Some(7));
        assert_eq!(check_weight('A'), Some(1));
        assert_eq!(check_weight('J'), Some(1));
        assert_eq!(check_weight('P'), Some(7));
        assert_eq!(check_weight('R'), Some(9));
        assert_eq!(check_weight('S'), Some(2));
        assert_eq!(check_weight('Z'), Some(9));
        assert_eq!(check_weight('I'), None);
        assert_eq!(check_weight('O'), None);
        assert_eq!(check_weight('Q'), None);
        assert_eq!(check_weight('a'), None);
        assert_eq!(check_weight('-'), None);
    }

    #[test]
    fn remainder_ten_is_x() {
        assert_eq!(calculate_check_digit("1M8GDM9AXKP042788"), Ok('X'));
        assert!(verify_checksum("1M8GDM9AXKP042788"));
    }

    #[test]
    fn digit_check_characters() {
        assert_eq!(calculate_check_digit("5GZCZ43D13S812715"), Ok('1'));
        assert!(verify_checksum("5GZCZ43D13S812715"));
        assert!(verify_checksum("11111111111111111"));
    }

    #[test]
    fn mismatch_is_invalid() {
        assert!(!verify_checksum("5GZCZ43D23S812715"));
        assert!(!verify_checksum("1M8GDM9A1KP042788"));
    }

    #[test]
    fn check_position_is_excluded_from_sum() {
        assert_eq!(
            calculate_check_digit("5GZCZ43D13S812715"),
            calculate_check_digit("5GZCZ43D93S812715")
        );
    }

    #[test]
    fn prohibited_letters_fail_instead_of_counting_zero() {
        assert_eq!(
            calculate_check_digit("1M8GDM9AXKPO42788"),
            Err(VinError::InvalidCheckCharacter {
                character: 'O',
                position: 11
            })
        );
        assert!(!verify_checksum("1M8GDM9AXKPO42788"));
    }

    #[test]
    fn wrong_length_is_invalid() {
        assert!(!verify_checksum(""));
        assert!(!verify_checksum("1M8GDM9AXKP04278"));
        assert!(matches!(
            calculate_check_digit("1M8GDM9AXKP0427888"),
            Err(VinError::MalformedInput { actual: 18, .. })
        ));
    }

    #[test]
    fn trims_and_ignores_case() {
        assert!(verify_checksum("  1m8gdm9axkp042788\n"));
        assert!(Vin::new("1m8gdm9axkp042788").verify_checksum());
    }
}
