use std::env;

use log::debug;

use crate::error::{Error, Result};
use crate::window::DEFAULT_WINDOW_MINUTES;

pub const DEFAULT_BASE_URL: &str = "https://hsp-prod.rockshore.net/api/v1";

pub const USER_VAR: &str = "DAWIN_EMAIL";
pub const PASS_VAR: &str = "DAWIN_PASS";
pub const BASE_URL_VAR: &str = "HSP_BASE_URL";

/// Everything the HSP client needs, resolved once at startup.
#[derive(Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub base_url: String,
    pub window_minutes: u32,
}

impl Config {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Config {
        Config {
            username: username.into(),
            password: password.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            window_minutes: DEFAULT_WINDOW_MINUTES,
        }
    }

    /// Read credentials (and an optional base URL override) from the process environment.
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, against any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| match lookup(key) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(Error::MissingCredential(key)),
        };

        let mut config = Config::new(required(USER_VAR)?, required(PASS_VAR)?);
        if let Some(url) = lookup(BASE_URL_VAR).filter(|u| !u.is_empty()) {
            debug!("using {} from {}", url, BASE_URL_VAR);
            config = config.with_base_url(url);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Config {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_window(mut self, minutes: u32) -> Result<Config> {
        if minutes >= 24 * 60 {
            return Err(Error::InvalidWindow(minutes));
        }
        self.window_minutes = minutes;
        Ok(self)
    }
}
