use thiserror::Error;

/// Validation errors exposed by `ceprace-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid source '{value}', expected one of brasilapi, viacep")]
    InvalidSource { value: String },

    #[error("endpoint base url must start with http:// or https://: '{value}'")]
    InvalidEndpoint { value: String },
}
