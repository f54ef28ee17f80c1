//! VIN validity checks.
//!
//! Two independent notions of validity:
//!
//! - [`is_valid_vin`] / [`validate_structure`]: length, banned characters,
//!   model year code and check digit character class.
//! - [`verify_checksum`]: recomputes the weighted modulo-11 check digit.
//!
//! A VIN can pass the structural rules and still fail the checksum.

mod checksum;
mod structure;

pub use checksum::{WEIGHTS, calculate_check_digit, check_weight, verify_checksum};
pub use structure::{
    PROHIBITED_CHARACTERS, PROHIBITED_YEAR_CODES, StructureViolation, VIN_LENGTH, is_valid_vin,
    validate_structure,
};
