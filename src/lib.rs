//! Body-font fallback resolution for PDF export.
//!
//! Copyrighted fonts are never shipped. A rendered document requests a
//! preference-ordered chain of families, and this crate works out which one the
//! host can supply, with a generic family as the last resort. A packaging audit
//! makes sure no font files sneak into the distributed artifact.
//!
//! ```ignore
//! use fontchain::{ResolverConfig, system_resolver};
//!
//! let resolver = system_resolver(&ResolverConfig::default());
//! let font = resolver.resolve_body_font();
//! println!("{}", resolver.chain().to_typst_set_rule());
//! ```

pub mod error;

pub use error::FontchainError;

pub use fontchain_packaging::{
    ArtifactEntry, ArtifactListing, AuditReport, FontAssetPolicy, PackagingError, SizeBudget,
    SizeCheck, audit, audit_path, pack_tar_gz,
};
pub use fontchain_resolver::{
    DEFAULT_FONT_CHAIN, FontChain, FontResolver, ResolveError, ResolvedFont, ResolverConfig,
    resolve,
};
pub use fontchain_system::{CachedProbe, SystemFontProbe};
pub use fontchain_traits::{AvailableFontSet, FontAvailabilityProbe, InMemoryFontProbe, ProbeError};

use std::sync::Arc;

/// Builds the host probe described by a configuration.
pub fn system_probe(config: &ResolverConfig) -> SystemFontProbe {
    SystemFontProbe::new()
        .with_system_fonts(config.system_fonts)
        .with_font_dirs(config.font_dirs.iter().cloned())
}

/// Builds a resolver over the host's fonts, scanning them once per resolver.
pub fn system_resolver(config: &ResolverConfig) -> FontResolver {
    let probe = CachedProbe::new(system_probe(config));
    FontResolver::new(config.clone(), Arc::new(probe))
}
