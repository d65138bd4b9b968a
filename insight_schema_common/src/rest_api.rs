//! A client for the `cognitod` REST API, limited to what we need to fetch
//! the insight schema.

use reqwest::header::ACCEPT;
use url::Url;

use crate::{error::FetchFailure, prelude::*};

/// The path of the schema endpoint, relative to the service's base URL.
pub const SCHEMA_PATH: &str = "/insights/schema";

/// A client for talking to `cognitod`.
pub struct Client {
    endpoint: String,
    client: reqwest::Client,
}

impl Client {
    /// Create a new client for the service at `endpoint`.
    #[instrument(level = "trace")]
    pub fn new(endpoint: &str) -> Result<Client> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent())
            .build()
            .context("cannot build HTTP client")?;
        Ok(Client {
            endpoint: endpoint.to_owned(),
            client,
        })
    }

    /// The base URL we were given.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The URL of the schema endpoint. We append the path literally, so a
    /// trailing `/` on the endpoint gives a double slash.
    pub fn schema_url(&self) -> FetchSchemaResult<Url> {
        let url = format!("{}{}", self.endpoint, SCHEMA_PATH);
        url.parse::<Url>().map_err(|source| FetchSchemaError::Fetch {
            endpoint: self.endpoint.clone(),
            source: FetchFailure::InvalidUrl { url, source },
        })
    }

    /// Fetch the insight schema.
    ///
    /// `GET /insights/schema`
    #[instrument(level = "trace", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn insight_schema(&self) -> FetchSchemaResult<SchemaDocument> {
        let url = self.schema_url()?;
        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| {
                self.fetch_error(FetchFailure::Request {
                    url: url.clone(),
                    source,
                })
            })?;
        self.handle_json_response(&url, resp).await
    }

    /// Check the HTTP status code and parse a JSON response.
    #[instrument(level = "trace", skip_all, fields(url = %url, status = %resp.status()))]
    async fn handle_json_response(
        &self,
        url: &Url,
        resp: reqwest::Response,
    ) -> FetchSchemaResult<SchemaDocument> {
        if !resp.status().is_success() {
            return Err(self.handle_error_response(url, resp).await);
        }
        let body = resp.bytes().await.map_err(|source| {
            self.fetch_error(FetchFailure::Request {
                url: url.clone(),
                source,
            })
        })?;
        debug!("received {} bytes from {}", body.len(), url);
        SchemaDocument::from_json_slice(&body).map_err(|source| {
            FetchSchemaError::Parse {
                url: url.clone(),
                source,
            }
        })
    }

    /// Extract an error from an HTTP response payload.
    #[instrument(level = "trace", skip_all, fields(url = %url, status = %resp.status()))]
    async fn handle_error_response(
        &self,
        url: &Url,
        resp: reqwest::Response,
    ) -> FetchSchemaError {
        let status = resp.status();
        match resp.text().await {
            Ok(body) => self.fetch_error(FetchFailure::Status {
                url: url.clone(),
                status,
                body,
            }),
            Err(source) => self.fetch_error(FetchFailure::Request {
                url: url.clone(),
                source,
            }),
        }
    }

    fn fetch_error(&self, source: FetchFailure) -> FetchSchemaError {
        FetchSchemaError::Fetch {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint)
            // We don't need this for debugging.
            //
            // .field("client", &self.client)
            .finish()
    }
}

/// The `User-Agent` we send.
fn user_agent() -> String {
    format!("fetch-insight-schema/{}", env!("CARGO_PKG_VERSION"))
}
