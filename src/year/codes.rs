//! Model year code tables.
//!
//! Both cycles use the same 30 characters: the letters A-Y without
//! I, O, Q, U, Z, followed by the digits 1-9.

/// Position 10 codes for model years 1980-2009.
#[rustfmt::skip]
pub(super) static YEAR_CODES_PRE_2010: &[(char, u16)] = &[
    ('A', 1980), ('B', 1981), ('C', 1982), ('D', 1983), ('E', 1984),
    ('F', 1985), ('G', 1986), ('H', 1987), ('J', 1988), ('K', 1989),
    ('L', 1990), ('M', 1991), ('N', 1992), ('P', 1993), ('R', 1994),
    ('S', 1995), ('T', 1996), ('V', 1997), ('W', 1998), ('X', 1999),
    ('Y', 2000), ('1', 2001), ('2', 2002), ('3', 2003), ('4', 2004),
    ('5', 2005), ('6', 2006), ('7', 2007), ('8', 2008), ('9', 2009),
];

/// Position 10 codes for model years 2010-2039.
#[rustfmt::skip]
pub(super) static YEAR_CODES_2010_2039: &[(char, u16)] = &[
    ('A', 2010), ('B', 2011), ('C', 2012), ('D', 2013), ('E', 2014),
    ('F', 2015), ('G', 2016), ('H', 2017), ('J', 2018), ('K', 2019),
    ('L', 2020), ('M', 2021), ('N', 2022), ('P', 2023), ('R', 2024),
    ('S', 2025), ('T', 2026), ('V', 2027), ('W', 2028), ('X', 2029),
    ('Y', 2030), ('1', 2031), ('2', 2032), ('3', 2033), ('4', 2034),
    ('5', 2035), ('6', 2036), ('7', 2037), ('8', 2038), ('9', 2039),
];
