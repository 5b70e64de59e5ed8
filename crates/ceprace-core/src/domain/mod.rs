//! # Domain Models
//!
//! Provider-agnostic types shared by every adapter and the race coordinator.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`LookupKey`] | Opaque postal code passed through to every provider |
//! | [`Address`] | The five logical fields every provider schema maps into |
//! | [`NormalizedResult`] | Formatted address attributed to the provider that produced it |
//!
//! ## Formatting
//!
//! Every address renders through the same fixed template, so the output
//! always has five labeled segments even when a provider omits fields:
//!
//! ```rust
//! use ceprace_core::Address;
//!
//! let address = Address {
//!     code: String::from("01153000"),
//!     city: String::from("São Paulo"),
//!     region: String::from("SP"),
//!     ..Address::default()
//! };
//!
//! assert_eq!(
//!     address.formatted(),
//!     "CEP: 01153000, Rua: , Bairro: , Cidade: São Paulo, Estado: SP"
//! );
//! ```

mod lookup_key;
mod models;

pub use lookup_key::{LookupKey, DEFAULT_LOOKUP_KEY};
pub use models::{Address, NormalizedResult};
