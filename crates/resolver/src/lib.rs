//! Font fallback resolution for document rendering.
//!
//! A document asks for its body text in a preference-ordered list of font
//! families. This crate picks the first family the host can render, and falls
//! back to the last entry of the list when none of them is installed. No font
//! files are bundled; the final entry is expected to be a generic family the
//! rendering backend always understands.
//!
//! ## Entry points
//!
//! - [`resolve`]: pure resolution over a plain list of names
//! - [`FontChain::resolve`]: the same over a validated chain (cannot fail)
//! - [`FontResolver`]: a configured chain plus an injected availability probe

pub mod chain;
pub mod config;
pub mod error;
pub mod resolve;
pub mod resolver;
pub mod typst;

pub use chain::{DEFAULT_FONT_CHAIN, FontChain};
pub use config::ResolverConfig;
pub use error::ResolveError;
pub use resolve::{ResolvedFont, resolve};
pub use resolver::FontResolver;

pub use fontchain_traits::{AvailableFontSet, FontAvailabilityProbe, InMemoryFontProbe, ProbeError};
