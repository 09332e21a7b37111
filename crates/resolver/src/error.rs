use thiserror::Error;

/// Errors raised while resolving a body font.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The chain had nothing to select from.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid resolver configuration: {0}")]
    Config(String),
}

impl ResolveError {
    pub(crate) fn empty_chain() -> Self {
        ResolveError::InvalidInput("font chain must contain at least one family".to_string())
    }
}

impl From<serde_json::Error> for ResolveError {
    fn from(e: serde_json::Error) -> Self {
        ResolveError::Config(e.to_string())
    }
}
