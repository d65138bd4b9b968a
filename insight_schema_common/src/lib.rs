//! Code shared between the insight schema tools.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub use reqwest;
pub use serde;
pub use serde_json;
pub use tracing;
pub use url;

pub mod document;
pub mod error;
pub mod fetcher;
pub mod rest_api;
pub mod tracing_support;

/// The base URL of a `cognitod` running on this machine.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

/// Where the fetched schema goes, relative to the repository root.
pub const DEFAULT_OUTPUT: &str = "datasets/schema/insight.schema.json";

/// Common imports used by many modules.
pub mod prelude {
    pub use std::{
        fmt,
        fs::File,
        io::Write,
        path::{Path, PathBuf},
    };

    pub use anyhow::{format_err, Context};
    pub use serde::{Deserialize, Serialize};
    pub use tracing::{
        debug, debug_span, error, error_span, info, info_span, instrument, trace,
        trace_span, warn, warn_span,
    };

    pub use super::{
        document::SchemaDocument,
        error::{FetchSchemaError, FetchSchemaResult},
        Error, Result,
    };
}

/// Error type for this crate's functions.
pub use anyhow::Error;
/// Result type for this crate's functions.
pub use anyhow::Result;
