use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid arguments {0:?}, expected: <origin> <destination> <HHMM> <YYYY-MM-DD>")]
    InvalidArguments(String),

    #[error("invalid time {0:?}, expected HHMM between 0000 and 2359")]
    InvalidTime(String),

    #[error("invalid date {0:?}, expected a real YYYY-MM-DD calendar date")]
    InvalidDate(String),

    #[error("invalid station code {0:?}, expected 3 letters")]
    InvalidStation(String),

    #[error("invalid window of {0} minutes, must be below 1440")]
    InvalidWindow(u32),

    #[error("environment variable {0} must be set")]
    MissingCredential(&'static str),

    #[error("{endpoint} POST request failed with status code {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// True for errors caused by what the user typed, before any request is made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidArguments(_)
                | Error::InvalidTime(_)
                | Error::InvalidDate(_)
                | Error::InvalidStation(_)
                | Error::InvalidWindow(_)
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            e if e.is_validation() => 2,
            Error::MissingCredential(_) => 3,
            _ => 1,
        }
    }
}
