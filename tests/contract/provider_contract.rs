#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use ceprace_core::{
    AddressSource, BrasilApiAdapter, HttpError, HttpResponse, LookupKey, ProviderEndpoint,
    ProviderId, SourceErrorKind, ViaCepAdapter,
};

use common::*;

struct ProviderCase {
    id: ProviderId,
    valid_body: &'static str,
    expected_address: &'static str,
    sparse_body: &'static str,
}

fn provider_cases() -> Vec<ProviderCase> {
    vec![
        ProviderCase {
            id: ProviderId::BrasilApi,
            valid_body: BRASIL_API_BODY,
            expected_address: BARRA_FUNDA_BRASIL_API,
            sparse_body: r#"{"cep":"01153000","city":"São Paulo","state":"SP"}"#,
        },
        ProviderCase {
            id: ProviderId::ViaCep,
            valid_body: VIA_CEP_BODY,
            expected_address: BARRA_FUNDA_VIA_CEP,
            sparse_body: r#"{"cep":"01153-000","localidade":"São Paulo","uf":"SP"}"#,
        },
    ]
}

fn adapter_for(id: ProviderId, client: Arc<ScriptedHttpClient>) -> Arc<dyn AddressSource> {
    match id {
        ProviderId::BrasilApi => Arc::new(
            BrasilApiAdapter::with_http_client(client)
                .with_endpoint(ProviderEndpoint::base(BRASIL_API_TEST_BASE).expect("valid")),
        ),
        ProviderId::ViaCep => Arc::new(
            ViaCepAdapter::with_http_client(client)
                .with_endpoint(ProviderEndpoint::new(VIA_CEP_TEST_BASE, "/json/").expect("valid")),
        ),
    }
}

type Reply = fn(&str) -> Result<HttpResponse, HttpError>;

fn replying(reply: Reply, body: &str) -> Arc<ScriptedHttpClient> {
    Arc::new(
        ScriptedHttpClient::new()
            .route(BRASIL_API_TEST_BASE, 0, reply(body))
            .route(VIA_CEP_TEST_BASE, 0, reply(body)),
    )
}

#[tokio::test]
async fn lookup_returns_formatted_address_for_all_providers() {
    for case in provider_cases() {
        let adapter = adapter_for(case.id, replying(ok, case.valid_body));

        let result = adapter
            .lookup(LookupKey::new("01153000"))
            .await
            .unwrap_or_else(|error| panic!("provider '{}' lookup failed: {error}", case.id));

        assert_eq!(adapter.id(), case.id);
        assert_eq!(result.provider(), case.id, "provider '{}': id", case.id);
        assert_eq!(
            result.formatted_address(),
            case.expected_address,
            "provider '{}': address",
            case.id
        );
    }
}

#[tokio::test]
async fn sparse_replies_keep_five_labeled_segments_for_all_providers() {
    for case in provider_cases() {
        let adapter = adapter_for(case.id, replying(ok, case.sparse_body));

        let result = adapter
            .lookup(LookupKey::new("01153000"))
            .await
            .unwrap_or_else(|error| panic!("provider '{}' lookup failed: {error}", case.id));

        assert_eq!(
            segment_labels(result.formatted_address()),
            vec!["CEP", "Rua", "Bairro", "Cidade", "Estado"],
            "provider '{}': {}",
            case.id,
            result.formatted_address()
        );
        assert!(result.formatted_address().contains("Rua: ,"));
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error_for_all_providers() {
    for case in provider_cases() {
        for body in ["json invalido", "[]", r#"{"cep": 1153000}"#, "null"] {
            let adapter = adapter_for(case.id, replying(ok, body));

            let error = adapter
                .lookup(LookupKey::new("01153000"))
                .await
                .expect_err("malformed body must not produce a result");
            assert_eq!(
                error.kind(),
                SourceErrorKind::Decode,
                "provider '{}' body {body:?}",
                case.id
            );
            assert_eq!(error.provider(), case.id);
        }
    }
}

#[tokio::test]
async fn non_success_status_is_rejected_for_all_providers() {
    for case in provider_cases() {
        // A success-shaped body behind an error status must still be rejected.
        let client = Arc::new(
            ScriptedHttpClient::new()
                .route(BRASIL_API_TEST_BASE, 0, status(500, case.valid_body))
                .route(VIA_CEP_TEST_BASE, 0, status(500, case.valid_body)),
        );
        let adapter = adapter_for(case.id, client);

        let error = adapter
            .lookup(LookupKey::new("01153000"))
            .await
            .expect_err("error status must not produce a result");
        assert_eq!(error.kind(), SourceErrorKind::Status, "provider '{}'", case.id);
        assert_eq!(error.code(), "source.status");
    }
}

#[tokio::test]
async fn transport_failure_is_reported_for_all_providers() {
    for case in provider_cases() {
        let client = Arc::new(
            ScriptedHttpClient::new()
                .route(BRASIL_API_TEST_BASE, 0, refused())
                .route(VIA_CEP_TEST_BASE, 0, refused()),
        );
        let adapter = adapter_for(case.id, client);

        let error = adapter
            .lookup(LookupKey::new("01153000"))
            .await
            .expect_err("transport failure must not produce a result");
        assert_eq!(error.kind(), SourceErrorKind::Transport, "provider '{}'", case.id);
    }
}
