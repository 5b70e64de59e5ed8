use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Key used when the caller does not supply one.
pub const DEFAULT_LOOKUP_KEY: &str = "01153000";

/// Opaque postal code shared read-only by every adapter in a race.
///
/// No validation happens here: malformed keys are forwarded to providers,
/// which fail on their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LookupKey(Arc<str>);

impl LookupKey {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(Arc::from(value.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form used as a URL path segment.
    pub fn url_segment(&self) -> String {
        urlencoding::encode(self.as_str()).into_owned()
    }
}

impl Default for LookupKey {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_KEY)
    }
}

impl Display for LookupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for LookupKey {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl From<&str> for LookupKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<LookupKey> for String {
    fn from(value: LookupKey) -> Self {
        value.0.as_ref().to_owned()
    }
}
