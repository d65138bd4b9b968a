//! Errors which end a schema fetch.
//!
//! Each variant corresponds to one stage of the fetch: talking to the
//! service, parsing what it sent, and saving the result locally.

use std::{error, io, path::PathBuf, result};

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Result type for the fetch pipeline.
pub type FetchSchemaResult<T> = result::Result<T, FetchSchemaError>;

/// Why we couldn't fetch, parse or save a schema.
#[derive(Debug, Error)]
pub enum FetchSchemaError {
    /// We couldn't get a successful response from the service.
    #[error("could not fetch schema from {endpoint}")]
    Fetch {
        /// The endpoint we were asked to talk to.
        endpoint: String,
        /// What went wrong.
        #[source]
        source: FetchFailure,
    },

    /// The service answered, but the body wasn't JSON.
    #[error("could not parse schema from {url}")]
    Parse {
        /// The URL which returned the body.
        url: Url,
        /// The JSON decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// We couldn't save the schema to disk.
    #[error("could not write schema to {}", .path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// The ways in which talking to the service can fail.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// `<endpoint>/insights/schema` isn't a valid URL.
    #[error("invalid URL {url:?}")]
    InvalidUrl {
        /// The URL we tried to build.
        url: String,
        /// Why it didn't parse.
        #[source]
        source: url::ParseError,
    },

    /// The request failed at the network level.
    #[error("error getting {url}")]
    Request {
        /// The URL we requested.
        url: Url,
        /// The HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// The service returned a non-success status.
    #[error("unexpected HTTP status {status} for {url}:\n{body}")]
    Status {
        /// The URL we requested.
        url: Url,
        /// The status we got back.
        status: StatusCode,
        /// The response body, if we could read it.
        body: String,
    },
}

impl FetchSchemaError {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            FetchSchemaError::Fetch { .. }
            | FetchSchemaError::Parse { .. }
            | FetchSchemaError::Write { .. } => 1,
        }
    }

    /// Write a human-readable description of this error to `out`.
    pub fn report(&self, out: &mut dyn io::Write) -> io::Result<()> {
        match self {
            FetchSchemaError::Fetch { endpoint, source } => {
                write!(out, "❌ Error fetching schema: ")?;
                write_chain(out, source)?;
                writeln!(out)?;
                writeln!(out, "Is cognitod running at {}?", endpoint)
            }
            FetchSchemaError::Parse { source, .. } => {
                writeln!(out, "❌ Error parsing schema JSON: {}", source)
            }
            FetchSchemaError::Write { path, source } => {
                write!(out, "❌ Error writing schema to {}: ", path.display())?;
                write_chain(out, source)?;
                writeln!(out)
            }
        }
    }
}

/// Write `err` followed by each of its causes, separated by `": "`.
fn write_chain(
    out: &mut dyn io::Write,
    err: &(dyn error::Error + 'static),
) -> io::Result<()> {
    write!(out, "{}", err)?;
    let mut cause = err.source();
    while let Some(err) = cause {
        write!(out, ": {}", err)?;
        cause = err.source();
    }
    Ok(())
}
