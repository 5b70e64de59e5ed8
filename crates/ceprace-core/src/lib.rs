//! # ceprace Core
//!
//! Resolves a Brazilian postal code (CEP) by asking several address
//! providers at once and keeping whichever answers first.
//!
//! ## Overview
//!
//! - **Domain types** for the lookup key and the provider-agnostic result
//! - **Provider adapters** (BrasilAPI, ViaCEP), one per response schema
//! - **Race coordinator** that fans a lookup out to every adapter and fans the
//!   first success back in, bounded by a deadline
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters and their schema parsers |
//! | [`data_source`] | Adapter trait and adapter error types |
//! | [`domain`] | Lookup key, address, normalized result |
//! | [`error`] | Validation errors |
//! | [`http_client`] | HTTP client abstraction |
//! | [`race`] | First-response race and its builder |
//! | [`source`] | Provider identifiers |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ceprace_core::{LookupKey, RaceOutcome, SourceRace};
//!
//! #[tokio::main]
//! async fn main() {
//!     let race = SourceRace::default();
//!
//!     match race.run(&LookupKey::new("01153000")).await {
//!         RaceOutcome::Won(result) => {
//!             println!("{}: {}", result.provider_name(), result.formatted_address());
//!         }
//!         RaceOutcome::TimedOut => println!("no provider answered in time"),
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / Caller   │
//! └────────┬────────┘
//!          │ LookupKey
//!          ▼
//! ┌─────────────────┐   first of { result, deadline }
//! │   SourceRace    │◀──────────────────────────────┐
//! └────────┬────────┘                               │
//!          │ tokio::spawn per adapter               │ mpsc (capacity = N)
//!          ▼                                        │
//! ┌─────────────────┐     ┌──────────────────┐      │
//! │ AddressSource   │────▶│ HTTP Client      │      │
//! │ (one per API)   │     │ (reqwest)        │      │
//! └────────┬────────┘     └──────────────────┘      │
//!          │ NormalizedResult                       │
//!          └────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Adapter failures (transport, non-2xx status, undecodable body, unknown
//! code) stay inside the adapter's task and are only logged. The caller sees
//! exactly two outcomes: [`RaceOutcome::Won`] or [`RaceOutcome::TimedOut`].

pub mod adapters;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod race;
pub mod source;

// Adapter implementations
pub use adapters::{
    parse_brasil_api, parse_via_cep, BrasilApiAdapter, ProviderEndpoint, ViaCepAdapter,
};

// Data source trait and types
pub use data_source::{AddressSource, LookupFuture, SourceError, SourceErrorKind};

// Domain models
pub use domain::{Address, LookupKey, NormalizedResult, DEFAULT_LOOKUP_KEY};

// Error types
pub use error::ValidationError;

// HTTP client types
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

// Race coordination
pub use race::{race, RaceOutcome, SourceRace, SourceRaceBuilder, DEFAULT_DEADLINE};

// Source identifiers
pub use source::ProviderId;
