//! Parsing primitives

use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    IResult, Parser,
};

/// Literal prefix of per-day mapping file names.
pub const FILE_PREFIX: &str = "geoTwitter";

/// Match mapping file names like `geoTwitter20-02-14.zip.lang`, return the
/// date stamp between the prefix and the first `.zip`.
pub fn date_stamp(file_name: &str) -> Option<&str> {
    let rest = file_name.strip_prefix(FILE_PREFIX)?;
    let (stamp, _) = rest.split_once(".zip")?;
    Some(stamp)
}

/// Parse a `YY-MM-DD` date stamp, the year is assumed to be in the 2000s.
pub fn date(stamp: &str) -> Result<NaiveDate> {
    fn field(s: &str) -> IResult<&str, u32> {
        map_res(take_while_m_n(1, 2, |c: char| c.is_ascii_digit()), |s: &str| {
            s.parse::<u32>()
        })
        .parse(s)
    }

    let Ok((_, (yy, _, mm, _, dd))) =
        all_consuming((field, char('-'), field, char('-'), field))
            .parse(stamp)
    else {
        bail!("{stamp:?} does not match YY-MM-DD");
    };

    let Some(date) = NaiveDate::from_ymd_opt(2000 + yy as i32, mm, dd) else {
        bail!("{stamp:?} is not a valid calendar date");
    };

    Ok(date)
}

/// Ordinal day of the year (1-366) of a `YY-MM-DD` date stamp.
pub fn day_of_year(stamp: &str) -> Result<u32> {
    Ok(date(stamp)?.ordinal())
}
