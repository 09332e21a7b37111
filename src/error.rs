// src/error.rs
use fontchain_packaging::PackagingError;
use fontchain_resolver::ResolveError;
use fontchain_traits::ProbeError;
use thiserror::Error;

/// A comprehensive error type for font resolution and packaging checks.
#[derive(Error, Debug)]
pub enum FontchainError {
    #[error("Resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Font probe failed: {0}")]
    Probe(#[from] ProbeError),

    #[error("Packaging check failed: {0}")]
    Packaging(#[from] PackagingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FontchainError {
    fn from(e: serde_json::Error) -> Self {
        FontchainError::Resolve(ResolveError::from(e))
    }
}
