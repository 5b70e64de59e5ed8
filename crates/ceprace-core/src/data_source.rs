//! Address source trait and adapter error types.
//!
//! This module defines the adapter contract (`AddressSource`) every provider
//! implementation follows. An adapter performs exactly one request per
//! lookup and either yields a [`NormalizedResult`] or a [`SourceError`].
//! Errors never travel past the race coordinator: a failed adapter is
//! indistinguishable from a slow one.
//!
//! # Example
//!
//! ```rust,ignore
//! use ceprace_core::{AddressSource, BrasilApiAdapter, LookupKey, SourceError};
//!
//! async fn lookup(adapter: &BrasilApiAdapter) -> Result<(), SourceError> {
//!     let result = adapter.lookup(LookupKey::new("01153000")).await?;
//!     println!("{}: {}", result.provider_name(), result.formatted_address());
//!     Ok(())
//! }
//! ```

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{LookupKey, NormalizedResult, ProviderId};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Connection, timeout, or body read failure.
    Transport,
    /// Upstream answered with a non-2xx status.
    Status,
    /// Body is not JSON or does not match the provider schema.
    Decode,
    /// Provider answered but reported the key as unknown.
    NotFound,
}

/// Structured adapter error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    provider: ProviderId,
    message: String,
}

impl SourceError {
    pub fn transport(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Transport, provider, message)
    }

    pub fn status(provider: ProviderId, status: u16) -> Self {
        Self::new(
            SourceErrorKind::Status,
            provider,
            format!("upstream returned status {status}"),
        )
    }

    pub fn decode(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Decode, provider, message)
    }

    pub fn not_found(provider: ProviderId) -> Self {
        Self::new(
            SourceErrorKind::NotFound,
            provider,
            "provider reported the code as unknown",
        )
    }

    fn new(kind: SourceErrorKind, provider: ProviderId, message: impl Into<String>) -> Self {
        Self {
            kind,
            provider,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub const fn provider(&self) -> ProviderId {
        self.provider
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Transport => "source.transport",
            SourceErrorKind::Status => "source.status",
            SourceErrorKind::Decode => "source.decode",
            SourceErrorKind::NotFound => "source.not_found",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.provider, self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Boxed future returned by [`AddressSource::lookup`].
pub type LookupFuture<'a> =
    Pin<Box<dyn Future<Output = Result<NormalizedResult, SourceError>> + Send + 'a>>;

/// Provider adapter contract.
///
/// Implementations must be `Send + Sync`: the race coordinator moves each
/// adapter into its own task.
pub trait AddressSource: Send + Sync {
    /// Provider identifier reported on results this adapter produces.
    fn id(&self) -> ProviderId;

    /// Resolves `key` with a single upstream request.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the transport fails, the upstream status is
    /// not 2xx, the body does not match the provider schema, or the provider
    /// reports the key as unknown.
    fn lookup<'a>(&'a self, key: LookupKey) -> LookupFuture<'a>;
}
