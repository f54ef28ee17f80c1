//! Repair of common VIN data entry and OCR errors.

use crate::core::Vin;

/// Characters that never occur in a VIN, mapped to the one usually meant.
static ENTRY_ERROR_MAP: &[(char, char)] = &[('I', '1'), ('O', '0'), ('Q', '0')];

/// Uppercase the input and substitute commonly misread characters.
///
/// Each character maps to exactly one character, so the output has the
/// same number of characters as the uppercased input. The result is not
/// validated.
pub fn repair(raw: &str) -> String {
    let upper = raw.to_uppercase();
    let repaired: String = upper
        .chars()
        .map(|c| {
            ENTRY_ERROR_MAP
                .iter()
                .find(|&&(wrong, _)| wrong == c)
                .map_or(c, |&(_, right)| right)
        })
        .collect();
    if repaired != upper {
        tracing::debug!(input = raw, output = %repaired, "repaired VIN characters");
    }
    repaired
}

impl Vin {
    /// A repaired copy of this VIN. See [`repair`].
    pub fn repaired(&self) -> Vin {
        Vin::new(repair(self.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_confusable_letters() {
        assert_eq!(repair("1M8GDM9AXKPO42788"), "1M8GDM9AXKP042788");
        assert_eq!(repair("iQo"), "100");
    }

    #[test]
    fn leaves_other_characters_alone() {
        assert_eq!(repair("1m8gdm9axkp042788"), "1M8GDM9AXKP042788");
        assert_eq!(repair(" -?"), " -?");
        assert_eq!(repair(""), "");
    }

    #[test]
    fn repaired_vin_passes_checksum() {
        let vin = Vin::new("1M8GDM9AXKPQ42788");
        assert!(!vin.verify_checksum());
        let fixed = vin.repaired();
        assert!(fixed.is_valid());
        assert!(fixed.verify_checksum());
    }

    #[test]
    fn idempotent() {
        let once = repair("IOQ1M8GDMOAX");
        assert_eq!(repair(&once), once);
    }
}
