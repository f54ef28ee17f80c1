//! Model year decoding.
//!
//! Position 10 reuses the same 30 codes for two 30-year cycles. For
//! passenger cars, multipurpose vehicles and light trucks, a digit in
//! position 7 selects 1980-2009 and a letter selects 2010-2039.

mod codes;

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::{Vin, VinError};
use codes::{YEAR_CODES_2010_2039, YEAR_CODES_PRE_2010};

/// The 30-year model year cycle selected by position 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearCycle {
    /// Model years 1980-2009 (position 7 numeric).
    Pre2010,
    /// Model years 2010-2039 (position 7 alphabetic).
    From2010,
}

impl YearCycle {
    /// Inclusive range of model years covered by this cycle.
    pub fn span(self) -> RangeInclusive<u16> {
        match self {
            YearCycle::Pre2010 => 1980..=2009,
            YearCycle::From2010 => 2010..=2039,
        }
    }

    /// Resolve a position 10 code within this cycle.
    pub fn year_for(self, code: char) -> Result<u16, VinError> {
        let table = match self {
            YearCycle::Pre2010 => YEAR_CODES_PRE_2010,
            YearCycle::From2010 => YEAR_CODES_2010_2039,
        };
        table
            .iter()
            .find(|&&(c, _)| c == code)
            .map(|&(_, year)| year)
            .ok_or(VinError::UnknownYearCode { code, cycle: self })
    }
}

impl fmt::Display for YearCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span();
        write!(f, "{}-{}", span.start(), span.end())
    }
}

impl Vin {
    /// Whether position 7 is a decimal digit, placing the model year in
    /// 1980-2009.
    pub fn is_pre_2010(&self) -> Result<bool, VinError> {
        Ok(self.char_at("model year cycle", 6)?.is_ascii_digit())
    }

    /// The model year cycle selected by position 7.
    pub fn year_cycle(&self) -> Result<YearCycle, VinError> {
        Ok(if self.is_pre_2010()? {
            YearCycle::Pre2010
        } else {
            YearCycle::From2010
        })
    }

    /// The model year.
    pub fn year(&self) -> Result<u16, VinError> {
        let cycle = self.year_cycle()?;
        cycle.year_for(self.model_year_code()?)
    }
}
