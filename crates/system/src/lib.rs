//! Availability probes for the fontchain resolver.
//!
//! ## Available Probes
//!
//! - [`SystemFontProbe`]: enumerates installed families via fontdb (feature: `system-fonts`)
//! - [`CachedProbe`]: remembers another probe's answer for a render session
//!
//! ## Re-exports
//!
//! - [`InMemoryFontProbe`]: pre-populated family list from fontchain-traits

mod cache;
mod system;

pub use cache::CachedProbe;
pub use system::SystemFontProbe;
#[cfg(feature = "system-fonts")]
pub use system::families_in_database;

pub use fontchain_traits::InMemoryFontProbe;
