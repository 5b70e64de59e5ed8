//! Provider adapters.
//!
//! Each adapter owns one fixed endpoint and one response schema. The shared
//! request path lives here: one GET, a status guard, and the raw body handed
//! to the provider-specific parser.

mod brasilapi;
mod viacep;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

pub use brasilapi::{parse_brasil_api, BrasilApiAdapter, BRASIL_API_BASE_URL};
pub use viacep::{parse_via_cep, ViaCepAdapter, VIA_CEP_BASE_URL, VIA_CEP_SUFFIX};

use crate::data_source::SourceError;
use crate::http_client::{HttpClient, HttpRequest};
use crate::{LookupKey, ProviderId, ValidationError};

/// Fixed endpoint of a provider: `<base_url><key><suffix>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoint {
    base_url: String,
    suffix: String,
}

impl ProviderEndpoint {
    pub fn new(
        base_url: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidEndpoint { value: base_url });
        }
        Ok(Self {
            base_url,
            suffix: suffix.into(),
        })
    }

    /// Built-in endpoints skip validation.
    pub(crate) fn fixed(base_url: &str, suffix: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
            suffix: suffix.to_owned(),
        }
    }

    /// Endpoint with nothing appended after the key.
    pub fn base(base_url: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(base_url, "")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, key: &LookupKey) -> String {
        format!("{}{}{}", self.base_url, key.url_segment(), self.suffix)
    }
}

/// Issues the single GET for a lookup and returns the body of a 2xx reply.
async fn fetch_body(
    http_client: &dyn HttpClient,
    provider: ProviderId,
    url: String,
    timeout_ms: u64,
) -> Result<String, SourceError> {
    debug!(provider = %provider, url = %url, "requesting address");

    let request = HttpRequest::get(url)
        .with_header("accept", "application/json")
        .with_timeout_ms(timeout_ms);

    let response = http_client
        .execute(request)
        .await
        .map_err(|error| SourceError::transport(provider, error.message()))?;

    if !response.is_success() {
        return Err(SourceError::status(provider, response.status));
    }

    Ok(response.body)
}

/// Decodes a provider body that must be a JSON object.
///
/// Derived payload structs would also accept a JSON array and map its
/// elements onto fields by position.
fn decode_object<T: DeserializeOwned>(
    provider: ProviderId,
    body: &str,
) -> Result<T, SourceError> {
    let object: Map<String, Value> = serde_json::from_str(body)
        .map_err(|error| SourceError::decode(provider, error.to_string()))?;
    serde_json::from_value(Value::Object(object))
        .map_err(|error| SourceError::decode(provider, error.to_string()))
}
