use std::borrow::Cow;

use serde::Serialize;

use crate::ProviderId;

/// Logical address fields every provider schema is mapped into.
///
/// Fields a provider does not return stay empty; they are never dropped
/// from the formatted output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    pub code: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    /// State abbreviation (`SP`, `RJ`, ...).
    pub region: String,
}

impl Address {
    /// Renders the fixed five-segment template.
    ///
    /// Commas inside a value are rewritten as ` -` so a value like
    /// `Rua A, 10` cannot open a sixth segment.
    pub fn formatted(&self) -> String {
        format!(
            "CEP: {}, Rua: {}, Bairro: {}, Cidade: {}, Estado: {}",
            segment(&self.code),
            segment(&self.street),
            segment(&self.neighborhood),
            segment(&self.city),
            segment(&self.region)
        )
    }
}

fn segment(value: &str) -> Cow<'_, str> {
    if value.contains(',') {
        Cow::Owned(value.replace(',', " -"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Provider-agnostic lookup result.
///
/// Immutable once built; the raw provider payload is not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedResult {
    provider: ProviderId,
    formatted_address: String,
}

impl NormalizedResult {
    pub fn new(provider: ProviderId, address: &Address) -> Self {
        Self {
            provider,
            formatted_address: address.formatted(),
        }
    }

    pub const fn provider(&self) -> ProviderId {
        self.provider
    }

    pub const fn provider_name(&self) -> &'static str {
        self.provider.as_str()
    }

    pub fn formatted_address(&self) -> &str {
        &self.formatted_address
    }
}
