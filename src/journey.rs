//! The journey being looked up, parsed from the command line.

use std::fmt;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};
use crate::window::Hhmm;

/// `"yrk shf 0800 2020-10-09"`: 3 + 1 + 3 + 1 + 4 + 1 + 10.
const ARGUMENTS_LEN: usize = 23;

lazy_static! {
    static ref INTERFACE: Regex =
        Regex::new(r"(?i)^([a-z]{3}) ([a-z]{3}) ([0-9]{4}) ([0-9]{4}-[0-9]{2}-[0-9]{2})$")
            .expect("interface pattern is valid");
}

/// A 3-letter CRS station code, held in upper case.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Crs(String);

impl Crs {
    /// Accepts letters in either case.
    pub fn parse(s: &str) -> Result<Crs> {
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::InvalidStation(s.to_string()));
        }
        Ok(Crs(s.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.0)
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four positional fields, exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyArgs {
    pub origin: String,
    pub destination: String,
    pub time: String,
    pub date: String,
}

/// Join the raw tokens and match them against
/// `<origin> <destination> <HHMM> <YYYY-MM-DD>`.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> Result<JourneyArgs> {
    let joined = tokens
        .iter()
        .flat_map(|t| t.as_ref().split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");

    if joined.len() != ARGUMENTS_LEN {
        return Err(Error::InvalidArguments(joined));
    }

    let caps = match INTERFACE.captures(&joined) {
        Some(caps) => caps,
        None => return Err(Error::InvalidArguments(joined)),
    };

    Ok(JourneyArgs {
        origin: caps[1].to_string(),
        destination: caps[2].to_string(),
        time: caps[3].to_string(),
        date: caps[4].to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyRequest {
    pub origin: Crs,
    pub destination: Crs,
    pub departure: Hhmm,
    pub date: NaiveDate,
}

impl JourneyRequest {
    pub fn from_args(args: &JourneyArgs) -> Result<JourneyRequest> {
        let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(args.date.clone()))?;
        Ok(JourneyRequest {
            origin: Crs::parse(&args.origin)?,
            destination: Crs::parse(&args.destination)?,
            departure: args.time.parse()?,
            date,
        })
    }

    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<JourneyRequest> {
        JourneyRequest::from_args(&parse_args(tokens)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(origin: &str, destination: &str, time: &str, date: &str) -> JourneyArgs {
        JourneyArgs {
            origin: origin.into(),
            destination: destination.into(),
            time: time.into(),
            date: date.into(),
        }
    }

    #[test]
    fn parses_standard_input() {
        assert_eq!(
            parse_args(&["yrk shf 0800 2020-10-09"]).unwrap(),
            args("yrk", "shf", "0800", "2020-10-09")
        );
    }

    #[test]
    fn parses_separate_tokens() {
        assert_eq!(
            parse_args(&["YRK", "shf", "0800", "2020-10-09"]).unwrap(),
            args("YRK", "shf", "0800", "2020-10-09")
        );
    }

    #[test]
    fn normalises_whitespace() {
        assert_eq!(
            parse_args(&["  yrk\tshf ", "0800   2020-10-09 "]).unwrap(),
            args("yrk", "shf", "0800", "2020-10-09")
        );
    }

    #[test]
    fn rejects_long_codes() {
        assert!(matches!(
            parse_args(&["yrkk shff 0800 2020-10-09"]),
            Err(Error::InvalidArguments(_))
        ));
    }

    #[test]
    fn rejects_right_length_wrong_shape() {
        // 23 characters, but the fields are out of order
        assert!(matches!(
            parse_args(&["0800 yrk shf 2020-10-09"]),
            Err(Error::InvalidArguments(_))
        ));
        assert!(matches!(
            parse_args(&["yr1 shf 0800 2020-10-09"]),
            Err(Error::InvalidArguments(_))
        ));
        assert!(matches!(
            parse_args(&["yrk shf 0800 2020/10/09"]),
            Err(Error::InvalidArguments(_))
        ));
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(parse_args::<&str>(&[]).is_err());
        assert!(parse_args(&["yrk", "shf", "0800"]).is_err());
    }

    #[test]
    fn request_uppercases_stations() {
        let req = JourneyRequest::parse(&["yrk shf 1731 2020-10-09"]).unwrap();
        assert_eq!(req.origin.as_str(), "YRK");
        assert_eq!(req.destination.as_str(), "SHF");
        assert_eq!(req.departure.to_string(), "1731");
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2020, 10, 9).unwrap());
    }

    #[test]
    fn request_rejects_out_of_range_time() {
        assert!(matches!(
            JourneyRequest::parse(&["yrk shf 2460 2020-10-09"]),
            Err(Error::InvalidTime(_))
        ));
    }

    #[test]
    fn request_rejects_impossible_date() {
        assert!(matches!(
            JourneyRequest::parse(&["yrk shf 0800 2020-02-30"]),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn crs_rules() {
        assert_eq!(Crs::parse("kgx").unwrap(), Crs::parse("KGX").unwrap());
        assert!(Crs::parse("KG").is_err());
        assert!(Crs::parse("K1X").is_err());
        assert_eq!(format!("{:?}", Crs::parse("shf").unwrap()), "Crs(SHF)");
    }
}
