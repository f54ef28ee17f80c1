use std::fmt;

use serde::Serialize;

use super::error::VinError;
use super::vin::Vin;
use crate::origin::Region;

/// Structured view of a decoded VIN.
///
/// Decoding performs no validation: a VIN that fails
/// [`is_valid_vin`](crate::verify::is_valid_vin) may still decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedVin {
    /// The normalized VIN.
    pub vin: Vin,
    /// World Manufacturer Identifier.
    pub wmi: String,
    /// Vehicle Descriptor Section.
    pub vds: String,
    /// Vehicle Identifier Sequence.
    pub vis: String,
    /// Manufacturer region, `Unknown` if the first character is unassigned.
    pub region: Region,
    /// Manufacturer country, `"Unknown"` if unresolved.
    pub country: &'static str,
    /// Model year.
    pub year: u16,
    /// Vehicle sequential number.
    pub sequential_number: String,
    /// Manufacturer builds fewer than 500 vehicles per year.
    pub less_than_500_built_per_year: bool,
}

impl DecodedVin {
    /// Serialize the decoded view as pretty-printed JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, VinError> {
        serde_json::to_string_pretty(self).map_err(|e| VinError::Serialization(e.to_string()))
    }
}

impl fmt::Display for DecodedVin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VIN:        {}", self.vin)?;
        writeln!(f, "WMI:        {}", self.wmi)?;
        writeln!(f, "VDS:        {}", self.vds)?;
        writeln!(f, "VIS:        {}", self.vis)?;
        writeln!(f, "Region:     {}", self.region)?;
        writeln!(f, "Country:    {}", self.country)?;
        writeln!(f, "Year:       {}", self.year)?;
        write!(
            f,
            "Sequential: {}{}",
            self.sequential_number,
            if self.less_than_500_built_per_year {
                " (fewer than 500 built per year)"
            } else {
                ""
            }
        )
    }
}

impl Vin {
    /// Decode every derived field into a [`DecodedVin`].
    pub fn decode(&self) -> Result<DecodedVin, VinError> {
        Ok(DecodedVin {
            vin: self.clone(),
            wmi: self.wmi()?.to_string(),
            vds: self.vds()?.to_string(),
            vis: self.vis()?.to_string(),
            region: self.region(),
            country: self.country(),
            year: self.year()?,
            sequential_number: self.sequential_number()?.to_string(),
            less_than_500_built_per_year: self.less_than_500_built_per_year()?,
        })
    }
}

/// Decode a raw VIN string.
///
/// Fails with [`VinError::MalformedInput`] when the input is too short
/// for a field and [`VinError::UnknownYearCode`] when the model year
/// cannot be resolved. An unassigned manufacturer code is reported as
/// [`Region::Unknown`] rather than an error.
pub fn decode(raw: &str) -> Result<DecodedVin, VinError> {
    Vin::new(raw).decode()
}
