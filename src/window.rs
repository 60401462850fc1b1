//! Search window derivation.
//!
//! HSP searches services departing between two HHMM times on a set of
//! days of the week. A single departure time is widened into such a
//! window here, and the travel date is bucketed into the day category
//! the API expects.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde_derive::Serialize;

use crate::error::{Error, Result};

/// Default distance between the two ends of a search window.
pub const DEFAULT_WINDOW_MINUTES: u32 = 60;

/// A 24-hour clock time as HSP writes it: `"0800"`, `"2359"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hhmm {
    hour: u8,
    minute: u8,
}

impl Hhmm {
    /// Last minute of the day; windows never extend past it.
    pub const END_OF_DAY: Hhmm = Hhmm {
        hour: 23,
        minute: 59,
    };

    pub fn new(hour: u8, minute: u8) -> Result<Hhmm> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime(format!("{:02}{:02}", hour, minute)));
        }
        Ok(Hhmm { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl FromStr for Hhmm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Hhmm> {
        let invalid = || Error::InvalidTime(s.to_string());
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hour: u8 = s[..2].parse().map_err(|_| invalid())?;
        let minute: u8 = s[2..].parse().map_err(|_| invalid())?;
        Hhmm::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for Hhmm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}

/// End of the search window that starts at `time` and lasts `delta` minutes.
///
/// Whole hours are carried out of the minute field. If the hour would pass
/// 23 the result saturates to `2359`: the window stays on the travel date
/// and never wraps round to `00xx`.
pub fn to_time(time: Hhmm, delta: u32) -> Hhmm {
    let minutes = u32::from(time.minute) + delta;
    let hour = u32::from(time.hour) + minutes / 60;
    if hour > 23 {
        return Hhmm::END_OF_DAY;
    }
    Hhmm {
        hour: hour as u8,
        minute: (minutes % 60) as u8,
    }
}

/// Day-of-week bucket used by the `days` field of a metrics query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayCategory {
    Weekday,
    Saturday,
    Sunday,
}

impl fmt::Display for DayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DayCategory::Weekday => "WEEKDAY",
            DayCategory::Saturday => "SATURDAY",
            DayCategory::Sunday => "SUNDAY",
        })
    }
}

pub fn weekday(date: NaiveDate) -> DayCategory {
    match date.weekday() {
        Weekday::Sat => DayCategory::Saturday,
        Weekday::Sun => DayCategory::Sunday,
        _ => DayCategory::Weekday,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchWindow {
    pub from_time: Hhmm,
    pub to_time: Hhmm,
    pub days: DayCategory,
}

impl SearchWindow {
    pub fn new(departure: Hhmm, date: NaiveDate, delta: u32) -> SearchWindow {
        SearchWindow {
            from_time: departure,
            to_time: to_time(departure, delta),
            days: weekday(date),
        }
    }
}
