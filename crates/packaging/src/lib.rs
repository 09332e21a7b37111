//! Packaging checks for font-free distributions.
//!
//! Fonts are resolved on the host at render time, so a distributed artifact
//! must not carry font files of its own. This crate inspects a built artifact
//! (an unpacked directory or a `.tar.gz`) and reports:
//!
//! - every entry that looks like a font asset, per a [`FontAssetPolicy`]
//! - whether the artifact is smaller than a reference build that bundled fonts,
//!   by at least the margin of a [`SizeBudget`]

mod audit;
mod error;
mod listing;
mod policy;

pub use audit::{AuditReport, SizeBudget, SizeCheck, audit, audit_path};
pub use error::PackagingError;
pub use listing::{ArtifactEntry, ArtifactListing, pack_tar_gz};
pub use policy::{DEFAULT_FONT_ASSET_PATTERN, FontAssetPolicy};
