//! # vindecode
//!
//! Decoding and validation of Vehicle Identification Numbers as
//! standardized by ISO 3779: field extraction, manufacturer region and
//! country, model year, structural rules, the weighted modulo-11 check
//! digit, and repair of common data entry misreads.
//!
//! All reference tables are `static` data; every operation is a pure
//! function over its input.
//!
//! ## Quick Start
//!
//! ```rust
//! use vindecode::*;
//!
//! let vin = Vin::new("1m8gdm9axkp042788");
//! assert!(vin.is_valid());
//! assert!(vin.verify_checksum());
//! assert_eq!(vin.wmi().unwrap(), "1M8");
//! assert_eq!(vin.region(), Region::NorthAmerica);
//! assert_eq!(vin.year().unwrap(), 1989);
//!
//! // "O" typed instead of "0"
//! assert!(!verify_checksum("1M8GDM9AXKPO42788"));
//! assert!(verify_checksum(&repair("1M8GDM9AXKPO42788")));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | (default) | Decoding, validation, check digit, repair |
//! | `json` | `DecodedVin::to_json` via `serde_json` |

pub mod core;
pub mod origin;
pub mod repair;
pub mod verify;
pub mod year;

// Re-export the primary API at crate root for convenience
pub use crate::core::*;
pub use crate::origin::{Origin, Region};
pub use crate::repair::repair;
pub use crate::verify::{
    StructureViolation, calculate_check_digit, check_weight, is_valid_vin, validate_structure,
    verify_checksum,
};
pub use crate::year::YearCycle;
