//! HTTP client for the Tokamak collection endpoints.

use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use tokamak_console_app::ports::ResourceFetcher;
use tokamak_console_domain::envelope::{ErrorInfo, ResultEnvelope};
use tokamak_console_domain::resource::{Resource, ResourceKind};

use crate::config::TokamakConfig;
use crate::error::ClientError;

/// Error body the API sends along with a non-2xx status.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorInfo>,
}

/// Fetches collections from `GET {endpoint}/v1/{kind}`.
#[derive(Debug, Clone)]
pub struct TokamakClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl TokamakClient {
    /// Build a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &TokamakConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    /// URL of the collection endpoint for `kind`.
    #[must_use]
    pub fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/v1/{kind}", self.endpoint)
    }

    async fn fetch<C: DeserializeOwned>(&self, kind: ResourceKind) -> Result<C, ClientError> {
        let mut request = self
            .http
            .get(self.collection_url(kind))
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let errors = serde_json::from_slice::<ErrorBody>(&body)
                .map(|body| body.errors)
                .unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                errors,
            });
        }

        serde_json::from_slice(&body).map_err(ClientError::Decode)
    }

    /// Fetch the collection of `R`, folding any failure into the envelope.
    pub async fn fetch_list<R: Resource>(&self) -> ResultEnvelope<R::List> {
        match self.fetch::<R::List>(R::KIND).await {
            Ok(list) => {
                tracing::debug!(resource = %R::KIND, "collection fetched");
                ResultEnvelope::accepted(list)
            }
            Err(err) => {
                tracing::warn!(resource = %R::KIND, error = %err, "collection fetch failed");
                ResultEnvelope::rejected(err.into_errors())
            }
        }
    }
}

impl<R: Resource> ResourceFetcher<R> for TokamakClient {
    fn list(&self) -> impl Future<Output = ResultEnvelope<R::List>> + Send {
        self.fetch_list::<R>()
    }
}
