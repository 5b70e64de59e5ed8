//! CLI argument definitions for ceprace.
//!
//! The surface is a single optional positional argument:
//!
//! ```bash
//! # Look up the default CEP (01153000)
//! ceprace
//!
//! # Look up a specific CEP
//! ceprace 20040002
//! ```

use clap::Parser;

use ceprace_core::{LookupKey, DEFAULT_LOOKUP_KEY};

/// Resolve a Brazilian CEP using whichever address API answers first.
#[derive(Debug, Parser)]
#[command(
    name = "ceprace",
    author,
    version,
    about = "Resolve a CEP with the fastest address API",
    long_about = "ceprace queries BrasilAPI and ViaCEP at the same time and prints the \
address from whichever answers first. If neither answers within one second a \
timeout message is printed instead.\n\
\n\
Set RUST_LOG=debug to see per-provider diagnostics on stderr."
)]
pub struct Cli {
    /// CEP to look up. Passed to the providers as given.
    #[arg(value_name = "CEP", default_value = DEFAULT_LOOKUP_KEY)]
    pub cep: String,
}

impl Cli {
    pub fn lookup_key(&self) -> LookupKey {
        LookupKey::new(&self.cep)
    }
}
