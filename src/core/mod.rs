//! Core VIN type, field extraction, decoding, and errors.
//!
//! A [`Vin`] is an uppercased string; every field (WMI, VDS, VIS, check
//! digit, model year code, sequential number) is derived on access.

mod decode;
mod error;
mod vin;

pub use decode::*;
pub use error::*;
pub use vin::*;
