use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use super::{decode_object, fetch_body, ProviderEndpoint};
use crate::data_source::{AddressSource, LookupFuture, SourceError};
use crate::http_client::{HttpClient, ReqwestHttpClient, DEFAULT_REQUEST_TIMEOUT_MS};
use crate::{Address, LookupKey, NormalizedResult, ProviderId};

pub const VIA_CEP_BASE_URL: &str = "https://viacep.com.br/ws/";
pub const VIA_CEP_SUFFIX: &str = "/json/";

/// ViaCEP adapter.
///
/// ViaCEP answers unknown codes with HTTP 200 and an `erro` member, so the
/// status guard alone is not enough here.
#[derive(Clone)]
pub struct ViaCepAdapter {
    http_client: Arc<dyn HttpClient>,
    endpoint: ProviderEndpoint,
    timeout_ms: u64,
}

impl Default for ViaCepAdapter {
    fn default() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()))
    }
}

impl ViaCepAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            endpoint: ProviderEndpoint::fixed(VIA_CEP_BASE_URL, VIA_CEP_SUFFIX),
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

impl AddressSource for ViaCepAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::ViaCep
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

            let address = parse_via_cep(&body)?;
            Ok(NormalizedResult::new(self.id(), &address))
        })
    }
}

/// Wire shape of a ViaCEP reply.
///
/// Only the mapped fields are read; `estado`, `regiao`, `ibge`, `gia`,
/// `ddd` and `siafi` are accepted and ignored.
#[derive(Debug, Deserialize)]
struct ViaCepPayload {
    #[serde(default)]
    cep: Option<String>,
    #[serde(default)]
    logradouro: Option<String>,
    #[serde(default)]
    bairro: Option<String>,
    #[serde(default)]
    localidade: Option<String>,
    #[serde(default)]
    uf: Option<String>,
    // `true` in older replies, `"true"` in newer ones.
    #[serde(default)]
    erro: Option<Value>,
}

impl ViaCepPayload {
    fn reports_unknown_code(&self) -> bool {
        match &self.erro {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(flag)) => !flag.eq_ignore_ascii_case("false"),
            Some(_) => true,
        }
    }
}

/// Parses a ViaCEP body into the common address fields.
pub fn parse_via_cep(body: &str) -> Result<Address, SourceError> {
    let payload: ViaCepPayload = decode_object(ProviderId::ViaCep, body)?;

    if payload.reports_unknown_code() {
        return Err(SourceError::not_found(ProviderId::ViaCep));
    }

    Ok(normalize(payload))
}

fn normalize(payload: ViaCepPayload) -> Address {
    Address {
        code: payload.cep.unwrap_or_default(),
        street: payload.logradouro.unwrap_or_default(),
        neighborhood: payload.bairro.unwrap_or_default(),
        city: payload.localidade.unwrap_or_default(),
        region: payload.uf.unwrap_or_default(),
    }
}
