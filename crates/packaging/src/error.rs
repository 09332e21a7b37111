use thiserror::Error;

/// Errors raised while inspecting a distribution artifact.
#[derive(Error, Debug)]
pub enum PackagingError {
    #[error("I/O error reading artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read archive '{path}': {message}")]
    Archive { path: String, message: String },

    #[error("Invalid font asset pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Artifact bundles {} font asset(s): {}", .paths.len(), .paths.join(", "))]
    BundledFonts { paths: Vec<String> },

    #[error(
        "Artifact size {actual} bytes is not at least {required} bytes smaller than the reference build ({reference} bytes)"
    )]
    SizeNotReduced {
        actual: u64,
        reference: u64,
        required: u64,
    },
}
