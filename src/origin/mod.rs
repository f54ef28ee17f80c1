//! Manufacturer region and country resolution.
//!
//! Resolution is two-stage: the first VIN character selects a row of the
//! world manufacturer table (giving the region), then the row's code sets
//! are scanned for one containing that same character (giving the
//! country). A row can exist while no code set matches; the country is
//! then `"Unknown"` even though the region is known.

mod wmi;

pub use wmi::{Region, WmiEntry, lookup};

use crate::core::{Vin, VinError};

/// Sentinel returned when a country cannot be resolved.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Manufacturer origin resolved from the first VIN character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    /// Region of the table row.
    pub region: Region,
    /// `None` if no code set of the region row contains the character.
    pub country: Option<&'static str>,
}

impl Vin {
    /// Strict origin lookup.
    ///
    /// Fails with [`VinError::UnknownOriginCode`] if the first character
    /// has no table entry, or [`VinError::MalformedInput`] if the VIN is
    /// empty.
    pub fn origin(&self) -> Result<Origin, VinError> {
        let first = self.char_at("world manufacturer code", 0)?;
        let entry = lookup(first).ok_or(VinError::UnknownOriginCode(first))?;
        let country = entry
            .countries
            .iter()
            .find(|(codes, _)| codes.contains(first))
            .map(|&(_, country)| country);
        Ok(Origin {
            region: entry.region,
            country,
        })
    }

    /// Manufacturer region, or [`Region::Unknown`].
    pub fn region(&self) -> Region {
        match self.origin() {
            Ok(origin) => origin.region,
            Err(e) => {
                tracing::trace!(vin = %self, error = %e, "region unresolved");
                Region::Unknown
            }
        }
    }

    /// Manufacturer country, or [`UNKNOWN_COUNTRY`].
    pub fn country(&self) -> &'static str {
        match self.origin() {
            Ok(Origin {
                country: Some(country),
                ..
            }) => country,
            Ok(Origin { region, .. }) => {
                tracing::trace!(vin = %self, %region, "no code set matches");
                UNKNOWN_COUNTRY
            }
            Err(e) => {
                tracing::trace!(vin = %self, error = %e, "country unresolved");
                UNKNOWN_COUNTRY
            }
        }
    }
}
