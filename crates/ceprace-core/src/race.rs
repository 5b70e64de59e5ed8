use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::adapters::{BrasilApiAdapter, ProviderEndpoint, ViaCepAdapter};
use crate::data_source::AddressSource;
use crate::http_client::{HttpClient, ReqwestHttpClient, DEFAULT_REQUEST_TIMEOUT_MS};
use crate::{LookupKey, NormalizedResult, ProviderId};

/// Overall budget of a race unless configured otherwise.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(1);

/// Terminal state of a single race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceOutcome {
    /// First successful result, attributed to its provider.
    Won(NormalizedResult),
    /// No provider delivered a result before the deadline.
    TimedOut,
}

impl RaceOutcome {
    pub fn winner(&self) -> Option<&NormalizedResult> {
        match self {
            Self::Won(result) => Some(result),
            Self::TimedOut => None,
        }
    }

    pub const fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut)
    }
}

/// Races `key` across every source and returns the first success.
///
/// Each source runs as its own tokio task and publishes into a channel sized
/// to the number of sources, so a late publisher never blocks. Failed sources
/// publish nothing. Losers are neither awaited nor aborted: they finish on
/// their own and their results are dropped.
///
/// Must be called from within a tokio runtime.
pub async fn race(
    key: &LookupKey,
    sources: &[Arc<dyn AddressSource>],
    deadline: Duration,
) -> RaceOutcome {
    let span = info_span!(
        "race",
        key = %key,
        providers = sources.len(),
        deadline_ms = as_millis(deadline)
    );
    run_race(key, sources, deadline).instrument(span).await
}

async fn run_race(
    key: &LookupKey,
    sources: &[Arc<dyn AddressSource>],
    deadline: Duration,
) -> RaceOutcome {
    if sources.is_empty() {
        warn!("no providers configured");
        return RaceOutcome::TimedOut;
    }

    let started = Instant::now();
    let (tx, mut rx) = mpsc::channel::<NormalizedResult>(sources.len());

    for source in sources {
        let source = Arc::clone(source);
        let key = key.clone();
        let tx = tx.clone();

        tokio::spawn(
            async move {
                let provider = source.id();
                match source.lookup(key).await {
                    Ok(result) => {
                        publish(&tx, provider, result);
                    }
                    Err(error) => {
                        debug!(
                            provider = %provider,
                            code = error.code(),
                            %error,
                            "provider dropped out"
                        );
                    }
                }
            }
            .in_current_span(),
        );
    }
    // Only the spawned tasks hold senders now; `recv` yields `None` once all of them failed.
    drop(tx);

    match tokio::time::timeout(deadline, rx.recv()).await {
        Ok(Some(result)) => {
            info!(
                provider = %result.provider(),
                elapsed_ms = as_millis(started.elapsed()),
                "race won"
            );
            RaceOutcome::Won(result)
        }
        Ok(None) => {
            warn!(
                elapsed_ms = as_millis(started.elapsed()),
                "every provider failed before the deadline"
            );
            RaceOutcome::TimedOut
        }
        Err(_) => {
            warn!("no provider answered before the deadline");
            RaceOutcome::TimedOut
        }
    }
}

/// A configured set of sources raced under one deadline.
#[derive(Clone)]
pub struct SourceRace {
    sources: Vec<Arc<dyn AddressSource>>,
    deadline: Duration,
}

impl Default for SourceRace {
    fn default() -> Self {
        SourceRaceBuilder::new().build()
    }
}

impl SourceRace {
    pub fn new(sources: Vec<Arc<dyn AddressSource>>) -> Self {
        Self {
            sources,
            deadline: DEFAULT_DEADLINE,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn sources(&self) -> &[Arc<dyn AddressSource>] {
        &self.sources
    }

    pub const fn deadline(&self) -> Duration {
        self.deadline
    }

    pub async fn run(&self, key: &LookupKey) -> RaceOutcome {
        race(key, &self.sources, self.deadline).await
    }
}

/// Builder for a [`SourceRace`] over the built-in providers.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use ceprace_core::{LookupKey, SourceRaceBuilder};
///
/// let race = SourceRaceBuilder::new()
///     .with_via_cep_enabled(false)
///     .with_deadline(Duration::from_millis(500))
///     .build();
///
/// let outcome = race.run(&LookupKey::new("01153000")).await;
/// ```
pub struct SourceRaceBuilder {
    http_client: Option<Arc<dyn HttpClient>>,
    enable_brasil_api: bool,
    enable_via_cep: bool,
    brasil_api_endpoint: Option<ProviderEndpoint>,
    via_cep_endpoint: Option<ProviderEndpoint>,
    request_timeout_ms: u64,
    deadline: Duration,
}

impl Default for SourceRaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceRaceBuilder {
    pub fn new() -> Self {
        Self {
            http_client: None,
            enable_brasil_api: true,
            enable_via_cep: true,
            brasil_api_endpoint: None,
            via_cep_endpoint: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            deadline: DEFAULT_DEADLINE,
        }
    }

    /// Share one transport across all built-in adapters.
    pub fn with_http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn with_brasil_api_enabled(mut self, enabled: bool) -> Self {
        self.enable_brasil_api = enabled;
        self
    }

    pub fn with_via_cep_enabled(mut self, enabled: bool) -> Self {
        self.enable_via_cep = enabled;
        self
    }

    pub fn with_brasil_api_endpoint(mut self, endpoint: ProviderEndpoint) -> Self {
        self.brasil_api_endpoint = Some(endpoint);
        self
    }

    pub fn with_via_cep_endpoint(mut self, endpoint: ProviderEndpoint) -> Self {
        self.via_cep_endpoint = Some(endpoint);
        self
    }

    /// Transport timeout of each upstream request. Independent of the race deadline.
    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn build(self) -> SourceRace {
        let http_client: Arc<dyn HttpClient> = match self.http_client {
            Some(http_client) => http_client,
            None => Arc::new(ReqwestHttpClient::new()),
        };
        let mut sources: Vec<Arc<dyn AddressSource>> = Vec::new();

        if self.enable_brasil_api {
            let mut adapter = BrasilApiAdapter::with_http_client(Arc::clone(&http_client))
                .with_timeout_ms(self.request_timeout_ms);
            if let Some(endpoint) = self.brasil_api_endpoint {
                adapter = adapter.with_endpoint(endpoint);
            }
            sources.push(Arc::new(adapter));
        }

        if self.enable_via_cep {
            let mut adapter = ViaCepAdapter::with_http_client(Arc::clone(&http_client))
                .with_timeout_ms(self.request_timeout_ms);
            if let Some(endpoint) = self.via_cep_endpoint {
                adapter = adapter.with_endpoint(endpoint);
            }
            sources.push(Arc::new(adapter));
        }

        SourceRace::new(sources).with_deadline(self.deadline)
    }
}

/// Hands a result to the coordinator. Returns `false` once the race is settled.
fn publish(
    tx: &mpsc::Sender<NormalizedResult>,
    provider: ProviderId,
    result: NormalizedResult,
) -> bool {
    match tx.try_send(result) {
        Ok(()) => {
            debug!(provider = %provider, "result published");
            true
        }
        Err(_) => {
            debug!(
                provider = %provider,
                "race already settled, discarding result"
            );
            false
        }
    }
}

fn as_millis(duration: Duration) -> u64 {
    duration.as_millis().min(u128::from(u64::MAX)) as u64
}
