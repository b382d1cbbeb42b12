// Error taxonomy for the library. Every failure aborts the run: there is
// no retry and no partial report.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no password entered")]
    MissingPassword,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error. Usage errors never reach here,
    /// clap reports them itself with code 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MissingPassword => 1,
            Error::Http(_) | Error::Api { .. } | Error::Decode(_) => 1,
            Error::Config(_) | Error::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
