//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ceprace_core::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ProviderEndpoint, SourceRace,
    SourceRaceBuilder,
};

pub const BRASIL_API_TEST_BASE: &str = "http://brasilapi.test/api/cep/v1/";
pub const VIA_CEP_TEST_BASE: &str = "http://viacep.test/ws/";

pub const BRASIL_API_BODY: &str = r#"{"cep":"01153000","state":"SP","city":"São Paulo","neighborhood":"Barra Funda","street":"Rua Vitorino Carmilo","service":"open-cep"}"#;
pub const VIA_CEP_BODY: &str = r#"{"cep":"01153-000","logradouro":"Rua Vitorino Carmilo","bairro":"Barra Funda","localidade":"São Paulo","uf":"SP"}"#;

pub const BARRA_FUNDA_BRASIL_API: &str =
    "CEP: 01153000, Rua: Rua Vitorino Carmilo, Bairro: Barra Funda, Cidade: São Paulo, Estado: SP";
pub const BARRA_FUNDA_VIA_CEP: &str =
    "CEP: 01153-000, Rua: Rua Vitorino Carmilo, Bairro: Barra Funda, Cidade: São Paulo, Estado: SP";

struct Route {
    prefix: String,
    delay: Duration,
    reply: Result<HttpResponse, HttpError>,
}

/// Transport fake answering by URL prefix after a scripted delay.
#[derive(Default)]
pub struct ScriptedHttpClient {
    routes: Vec<Route>,
    requested: Mutex<Vec<String>>,
    completed: AtomicUsize,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(
        mut self,
        prefix: &str,
        delay_ms: u64,
        reply: Result<HttpResponse, HttpError>,
    ) -> Self {
        self.routes.push(Route {
            prefix: prefix.to_owned(),
            delay: Duration::from_millis(delay_ms),
            reply,
        });
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    /// Number of requests that ran to the end of their scripted delay.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requested
            .lock()
            .expect("request store should not be poisoned")
            .push(request.url.clone());

        Box::pin(async move {
            let Some(route) = self
                .routes
                .iter()
                .find(|route| request.url.starts_with(&route.prefix))
            else {
                return Err(HttpError::new(format!("no route for {}", request.url)));
            };

            tokio::time::sleep(route.delay).await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            route.reply.clone()
        })
    }
}

/// Both built-in providers pointed at the scripted test hosts.
pub fn scripted_race(client: Arc<ScriptedHttpClient>, deadline: Duration) -> SourceRace {
    SourceRaceBuilder::new()
        .with_http_client(client)
        .with_brasil_api_endpoint(
            ProviderEndpoint::base(BRASIL_API_TEST_BASE).expect("valid test endpoint"),
        )
        .with_via_cep_endpoint(
            ProviderEndpoint::new(VIA_CEP_TEST_BASE, "/json/").expect("valid test endpoint"),
        )
        .with_deadline(deadline)
        .build()
}

pub fn ok(body: &str) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::ok_json(body))
}

pub fn status(code: u16, body: &str) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::with_status(code, body))
}

pub fn refused() -> Result<HttpResponse, HttpError> {
    Err(HttpError::new("connection failed: connection refused"))
}

/// Labels of the comma-separated `Label: value` segments.
pub fn segment_labels(formatted: &str) -> Vec<String> {
    formatted
        .split(", ")
        .map(|segment| {
            segment
                .split_once(':')
                .map_or_else(String::new, |(label, _)| label.to_owned())
        })
        .collect()
}
