use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Please choose both an arrival and a departure date")]
    Missing,

    #[error("'{0}' is not a valid date")]
    Unparseable(String),

    #[error("Departure {end} is before arrival {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("{0} is in the past")]
    InPast(NaiveDate),
}

/// Failures of the request/response cycle itself. An explicit `ok: false`
/// from the server is not an error.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Could not read server response: {0}")]
    Decode(String),

    #[error("Server response is missing '{0}'")]
    Incomplete(&'static str),
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CheckError::Decode(err.to_string())
        } else {
            CheckError::Transport(err.to_string())
        }
    }
}

impl From<gloo_net::Error> for CheckError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => CheckError::Decode(e.to_string()),
            other => CheckError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(err: serde_json::Error) -> Self {
        CheckError::Decode(err.to_string())
    }
}
