//! FontAvailabilityProbe trait for abstracting host font enumeration.
//!
//! The resolver never looks at the host itself. Whatever knows which fonts the
//! rendering engine can see (a font database, a fixture, the renderer's own
//! font list) implements this trait and is injected.

use crate::available::AvailableFontSet;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for availability probes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("Font enumeration unavailable: {0}")]
    Unavailable(String),

    #[error("Probe state lock poisoned: {0}")]
    LockPoisoned(&'static str),
}

/// A capability that reports which font families the host can render.
///
/// # Implementations
///
/// - `InMemoryFontProbe`: a pre-populated set (always available, used by tests)
/// - `SystemFontProbe`: fontdb-backed host enumeration (fontchain-system)
/// - `CachedProbe`: memoizes another probe for a render session (fontchain-system)
///
/// # Example
///
/// ```ignore
/// let probe = InMemoryFontProbe::with_families(["Arial", "Helvetica"]);
/// let available = probe.available_fonts()?;
/// assert!(available.contains("Arial"));
/// ```
pub trait FontAvailabilityProbe: Send + Sync + Debug {
    /// Returns the font families visible to the rendering engine right now.
    ///
    /// An empty set is a valid answer.
    fn available_fonts(&self) -> Result<AvailableFontSet, ProbeError>;

    /// Returns a human-readable name for this probe (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory availability probe.
///
/// Families are stored in memory and must be added before use.
#[derive(Debug, Default)]
pub struct InMemoryFontProbe {
    families: RwLock<AvailableFontSet>,
}

impl InMemoryFontProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a probe reporting exactly the given families.
    pub fn with_families<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            families: RwLock::new(families.into_iter().collect()),
        }
    }

    /// Adds a family to the reported set.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::LockPoisoned` if the internal lock is poisoned.
    pub fn add(&self, name: impl Into<String>) -> Result<(), ProbeError> {
        let mut families = self
            .families
            .write()
            .map_err(|_| ProbeError::LockPoisoned("in-memory probe"))?;
        families.insert(name);
        Ok(())
    }

    /// Removes a family.
    ///
    /// Returns `false` if the lock is poisoned or the family isn't present.
    pub fn remove(&self, name: &str) -> bool {
        self.families
            .write()
            .map(|mut families| families.remove(name))
            .unwrap_or(false)
    }

    /// Removes every family, simulating a host with no fonts.
    ///
    /// Does nothing if the lock is poisoned.
    pub fn clear(&self) {
        if let Ok(mut families) = self.families.write() {
            *families = AvailableFontSet::new();
        }
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.families.read().map(|f| f.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned.
    pub fn is_empty(&self) -> bool {
        self.families.read().map(|f| f.is_empty()).unwrap_or(true)
    }
}

impl FontAvailabilityProbe for InMemoryFontProbe {
    fn available_fonts(&self) -> Result<AvailableFontSet, ProbeError> {
        let families = self
            .families
            .read()
            .map_err(|_| ProbeError::LockPoisoned("in-memory probe"))?;
        Ok(families.clone())
    }

    fn name(&self) -> &'static str {
        "InMemoryFontProbe"
    }
}
