use reqwest::StatusCode;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which upstream call a [`FetchError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Observation,
    Alerts,
    Radar,
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Request::Observation => "observation",
            Request::Alerts => "alerts",
            Request::Radar => "radar",
        })
    }
}

/// A response body that is not the JSON document we expected.
#[derive(Debug, Error)]
#[error("malformed payload: {0}")]
pub struct ParseError(#[from] serde_json::Error);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{request} request failed: {source}")]
    Transport {
        request: Request,
        #[source]
        source: reqwest::Error,
    },
    #[error("{request} request returned HTTP {status}: {body}")]
    Status {
        request: Request,
        status: StatusCode,
        body: String,
    },
    #[error("{request} response could not be parsed: {source}")]
    Parse {
        request: Request,
        #[source]
        source: ParseError,
    },
    #[error("{request} response has content type {content_type:?}, expected an image")]
    NotAnImage {
        request: Request,
        content_type: String,
    },
}

impl FetchError {
    pub fn request(&self) -> Request {
        match self {
            FetchError::Transport { request, .. }
            | FetchError::Status { request, .. }
            | FetchError::Parse { request, .. }
            | FetchError::NotAnImage { request, .. } => *request,
        }
    }

    /// Transport failures and server-side statuses are worth one more attempt.
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport { .. } => true,
            FetchError::Status { status, .. } => status.is_server_error(),
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Process exit status for this failure. `2` is left to clap for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Fetch(_) => 1,
            Error::Write { .. } => 3,
        }
    }
}
