//! World manufacturer table keyed by the first VIN character.
//!
//! Each entry holds the region and an ordered list of code sets. A code
//! set is the run of characters a country was assigned for the second WMI
//! position (I, O, Q are never assigned).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Manufacturer region encoded by the first VIN character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
    /// The first character is not assigned to any region.
    Unknown,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::Oceania => "Oceania",
            Region::SouthAmerica => "South America",
            Region::Unknown => "Unknown",
        })
    }
}

/// One row of the world manufacturer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmiEntry {
    /// Region shared by every code set of the row.
    pub region: Region,
    /// `(code set, country)` pairs, scanned in order.
    pub countries: &'static [(&'static str, &'static str)],
}

const ALL: &str = "ABCDEFGHJKLMNPRSTUVWXYZ1234567890";

/// Look up the table row for a first character.
pub fn lookup(first: char) -> Option<&'static WmiEntry> {
    WORLD_MANUFACTURERS
        .binary_search_by_key(&first, |&(code, _)| code)
        .ok()
        .map(|i| &WORLD_MANUFACTURERS[i].1)
}

/// Sorted by key for binary search.
#[rustfmt::skip]
static WORLD_MANUFACTURERS: &[(char, WmiEntry)] = &[
    ('1', WmiEntry { region: Region::NorthAmerica, countries: &[(ALL, "United States")] }),
    ('2', WmiEntry { region: Region::NorthAmerica, countries: &[(ALL, "Canada")] }),
    (
        '3',
        WmiEntry {
            region: Region::NorthAmerica,
            countries: &[("ABCDEFGHJKLMNPRSTUVW", "Mexico"), ("XYZ1234567", "Costa Rica")],
        },
    ),
    ('4', WmiEntry { region: Region::NorthAmerica, countries: &[(ALL, "United States")] }),
    ('5', WmiEntry { region: Region::NorthAmerica, countries: &[(ALL, "United States")] }),
    (
        '6',
        WmiEntry {
            region: Region::Oceania,
            countries: &[("ABCDEFGHJKLMNPRSTUVW", "Australia")],
        },
    ),
    ('7', WmiEntry { region: Region::Oceania, countries: &[("ABCDE", "New Zealand")] }),
    (
        '8',
        WmiEntry {
            region: Region::SouthAmerica,
            countries: &[
                ("ABCDE", "Argentina"),
                ("FGHJK", "Chile"),
                ("LMNPR", "Ecuador"),
                ("STUVW", "Peru"),
                ("XYZ12", "Venezuela"),
            ],
        },
    ),
    (
        '9',
        WmiEntry {
            region: Region::SouthAmerica,
            countries: &[
                ("ABCDE", "Brazil"),
                ("FGHJK", "Colombia"),
                ("LMNPR", "Paraguay"),
                ("STUVW", "Uruguay"),
                ("XYZ12", "Trinidad & Tobago"),
                ("3456789", "Brazil"),
            ],
        },
    ),
    (
        'A',
        WmiEntry {
            region: Region::Africa,
            countries: &[("ABCDEFGH", "South Africa"), ("JKLMN", "Ivory Coast")],
        },
    ),
    (
        'B',
        WmiEntry {
            region: Region::Africa,
            countries: &[("ABCDE", "Angola"), ("FGHJK", "Kenya"), ("LMNPR", "Tanzania")],
        },
    ),
    (
        'C',
        WmiEntry {
            region: Region::Africa,
            countries: &[("ABCDE", "Benin"), ("FGHJK", "Madagascar"), ("LMNPR", "Tunisia")],
        },
    ),
    (
        'D',
        WmiEntry {
            region: Region::Africa,
            countries: &[("ABCDE", "Egypt"), ("FGHJK", "Morocco"), ("LMNPR", "Zambia")],
        },
    ),
    (
        'E',
        WmiEntry {
            region: Region::Africa,
            countries: &[("ABCDE", "Ethiopia"), ("FGHJK", "Mozambique")],
        },
    ),
    (
        'F',
        WmiEntry {
            region: Region::Africa,
            countries: &[("ABCDE", "Ghana"), ("FGHJK", "Nigeria")],
        },
    ),
    ('J', WmiEntry { region: Region::Asia, countries: &[(ALL, "Japan")] }),
    (
        'K',
        WmiEntry {
            region: Region::Asia,
            countries: &[
                ("ABCDE", "Sri Lanka"),
                ("FGHJK", "Israel"),
                ("LMNPR", "South Korea"),
                ("STUVW", "Kazakhstan"),
            ],
        },
    ),
    ('L', WmiEntry { region: Region::Asia, countries: &[(ALL, "China")] }),
    (
        'M',
        WmiEntry {
            region: Region::Asia,
            countries: &[
                ("ABCDE", "India"),
                ("FGHJK", "Indonesia"),
                ("LMNPR", "Thailand"),
                ("STUVW", "Myanmar"),
            ],
        },
    ),
    (
        'N',
        WmiEntry {
            region: Region::Asia,
            countries: &[("ABCDE", "Iran"), ("FGHJK", "Pakistan"), ("LMNPR", "Turkey")],
        },
    ),
    (
        'P',
        WmiEntry {
            region: Region::Asia,
            countries: &[("ABCDE", "Philippines"), ("FGHJK", "Singapore"), ("LMNPR", "Malaysia")],
        },
    ),
    (
        'R',
        WmiEntry {
            region: Region::Asia,
            countries: &[
                ("ABCDE", "United Arab Emirates"),
                ("FGHJK", "Taiwan"),
                ("LMNPR", "Vietnam"),
                ("STUVW", "Saudi Arabia"),
            ],
        },
    ),
    (
        'S',
        WmiEntry {
            region: Region::Europe,
            countries: &[
                ("ABCDEFGHJKLM", "United Kingdom"),
                ("NPRST", "Germany"),
                ("UVWXYZ", "Poland"),
                ("1234", "Latvia"),
            ],
        },
    ),
    (
        'T',
        WmiEntry {
            region: Region::Europe,
            countries: &[
                ("ABCDEFGH", "Switzerland"),
                ("JKLMNP", "Czech Republic"),
                ("RSTUV", "Hungary"),
                ("WXYZ1", "Portugal"),
            ],
        },
    ),
    (
        'U',
        WmiEntry {
            region: Region::Europe,
            countries: &[
                ("HJKLM", "Denmark"),
                ("NPRST", "Ireland"),
                ("UVWXYZ", "Romania"),
                ("567", "Slovakia"),
            ],
        },
    ),
    (
        'V',
        WmiEntry {
            region: Region::Europe,
            countries: &[
                ("ABCDE", "Austria"),
                ("FGHJKLMNPR", "France"),
                ("STUVW", "Spain"),
                ("XYZ12", "Serbia"),
                ("345", "Croatia"),
                ("67890", "Estonia"),
            ],
        },
    ),
    ('W', WmiEntry { region: Region::Europe, countries: &[(ALL, "Germany")] }),
    (
        'X',
        WmiEntry {
            region: Region::Europe,
            countries: &[
                ("ABCDE", "Bulgaria"),
                ("FGHJK", "Greece"),
                ("LMNPR", "Netherlands"),
                ("STUVW", "Russia"),
                ("XYZ12", "Luxembourg"),
                ("34567890", "Russia"),
            ],
        },
    ),
    (
        'Y',
        WmiEntry {
            region: Region::Europe,
            countries: &[
                ("ABCDE", "Belgium"),
                ("FGHJK", "Finland"),
                ("LMNPR", "Malta"),
                ("STUVW", "Sweden"),
                ("XYZ12", "Norway"),
                ("345", "Belarus"),
                ("67890", "Ukraine"),
            ],
        },
    ),
    (
        'Z',
        WmiEntry {
            region: Region::Europe,
            countries: &[
                ("ABCDEFGHJKLMNPR", "Italy"),
                ("XYZ12", "Slovenia"),
                ("345", "Lithuania"),
            ],
        },
    ),
];
