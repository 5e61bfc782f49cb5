use std::env;
use std::time::Duration;

use crate::model::global_error::NotifierError;

pub const WEBHOOK_URL_ENV: &str = "SLACK_WEBHOOK_URL";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub webhook_url: String,
    pub timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, NotifierError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Applies the same rule as [`Settings::from_env`] to an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url = lookup(WEBHOOK_URL_ENV)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                NotifierError::Configuration(format!("{WEBHOOK_URL_ENV} is not set"))
            })?;

        Ok(Self {
            webhook_url,
            timeout: REQUEST_TIMEOUT,
        })
    }
}

pub fn usage() -> String {
    format!(
        "ERROR: {WEBHOOK_URL_ENV} environment variable not set!\n\
         Usage: {WEBHOOK_URL_ENV}='your-webhook' {}",
        env!("CARGO_PKG_NAME")
    )
}
