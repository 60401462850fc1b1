//! Look up how a past train journey actually ran.
//!
//! Given an origin, a destination, a departure time and a date, the
//! National Rail Historical Service Performance (HSP) API is asked for
//! the first matching run, and that run's scheduled and actual arrival
//! at the destination is reported.

pub mod config;
pub mod error;
pub mod hsp;
pub mod journey;
pub mod report;
pub mod window;

pub use config::Config;
pub use error::{Error, Result};
pub use hsp::{HspApi, HspClient};
pub use journey::{parse_args, Crs, JourneyArgs, JourneyRequest};
pub use report::{lookup, Arrival, Outcome};
pub use window::{to_time, weekday, DayCategory, Hhmm, SearchWindow};
