use std::sync::Arc;

use serde::Deserialize;

use super::{decode_object, fetch_body, ProviderEndpoint};
use crate::data_source::{AddressSource, LookupFuture, SourceError};
use crate::http_client::{HttpClient, ReqwestHttpClient, DEFAULT_REQUEST_TIMEOUT_MS};
use crate::{Address, LookupKey, NormalizedResult, ProviderId};

pub const BRASIL_API_BASE_URL: &str = "https://brasilapi.com.br/api/cep/v1/";

/// BrasilAPI CEP v1 adapter.
#[derive(Clone)]
pub struct BrasilApiAdapter {
    http_client: Arc<dyn HttpClient>,
    endpoint: ProviderEndpoint,
    timeout_ms: u64,
}

impl Default for BrasilApiAdapter {
    fn default() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()))
    }
}

impl BrasilApiAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            endpoint: default_endpoint(),
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }

    pub fn with_endpoint(mut self, endpoint: ProviderEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn endpoint(&self) -> &ProviderEndpoint {
        &self.endpoint
    }
}

impl AddressSource for BrasilApiAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::BrasilApi
    }

    fn lookup<'a>(&'a self, key: LookupKey) -> LookupFuture<'a> {
        Box::pin(async move {
            let body = fetch_body(
                self.http_client.as_ref(),
                self.id(),
                self.endpoint.url_for(&key),
                self.timeout_ms,
            )
            .await?;

            let address = parse_brasil_api(&body)?;
            Ok(NormalizedResult::new(self.id(), &address))
        })
    }
}

fn default_endpoint() -> ProviderEndpoint {
    ProviderEndpoint::fixed(BRASIL_API_BASE_URL, "")
}

/// Wire shape of a BrasilAPI reply. `service` is ignored.
#[derive(Debug, Deserialize)]
struct BrasilApiPayload {
    #[serde(default)]
    cep: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    neighborhood: Option<String>,
    #[serde(default)]
    street: Option<String>,
}

/// Parses a BrasilAPI body into the common address fields.
pub fn parse_brasil_api(body: &str) -> Result<Address, SourceError> {
    let payload: BrasilApiPayload = decode_object(ProviderId::BrasilApi, body)?;
    Ok(normalize(payload))
}

fn normalize(payload: BrasilApiPayload) -> Address {
    Address {
        code: payload.cep.unwrap_or_default(),
        street: payload.street.unwrap_or_default(),
        neighborhood: payload.neighborhood.unwrap_or_default(),
        city: payload.city.unwrap_or_default(),
        region: payload.state.unwrap_or_default(),
    }
}
