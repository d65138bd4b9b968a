//! Fetch the insight schema and save it locally.

use std::io;

use crate::{
    prelude::*,
    rest_api::{Client, SCHEMA_PATH},
};

/// Fetches the insight schema from `cognitod` and writes it to a file.
#[derive(Debug)]
pub struct SchemaFetcher {
    client: Client,
    output: PathBuf,
}

impl SchemaFetcher {
    /// Create a fetcher which reads from the service at `endpoint` and writes
    /// to `output`.
    pub fn new<P: Into<PathBuf>>(endpoint: &str, output: P) -> Result<SchemaFetcher> {
        Ok(SchemaFetcher {
            client: Client::new(endpoint)?,
            output: output.into(),
        })
    }

    /// Fetch the schema, write it to our output file, and describe what we
    /// did on `diagnostics`.
    ///
    /// The output file is only touched once the schema has been fetched and
    /// parsed. Errors are returned without being reported; see
    /// [`FetchSchemaError::report`].
    #[instrument(level = "debug", skip_all, fields(endpoint = %self.client.endpoint()))]
    pub async fn fetch(
        &self,
        diagnostics: &mut dyn io::Write,
    ) -> FetchSchemaResult<SchemaDocument> {
        note(
            diagnostics,
            format_args!(
                "Fetching schema from {}{}...",
                self.client.endpoint(),
                SCHEMA_PATH
            ),
        );

        let schema = self.client.insight_schema().await?;
        schema
            .write_to_path(&self.output)
            .map_err(|source| FetchSchemaError::Write {
                path: self.output.clone(),
                source,
            })?;

        note(
            diagnostics,
            format_args!("✅ Schema saved to {}", self.output.display()),
        );
        note(
            diagnostics,
            format_args!("Schema version: {}", schema.version_label()),
        );
        Ok(schema)
    }
}

/// Write a line of diagnostic output. If stderr is gone there's nobody to
/// tell, so failures are only traced.
fn note(diagnostics: &mut dyn io::Write, line: fmt::Arguments<'_>) {
    if let Err(err) = writeln!(diagnostics, "{}", line) {
        warn!("could not write diagnostic output: {}", err);
    }
}
