//! Per-session caching of probe results.

use fontchain_traits::{AvailableFontSet, FontAvailabilityProbe, ProbeError};
use std::sync::RwLock;

/// Remembers the first successful answer of the wrapped probe.
///
/// Host font scans touch the filesystem, so a render session scans once and
/// reuses the result. Errors are passed through and not cached. Dropping the
/// cache after fonts are installed is the caller's call, via [`invalidate`].
///
/// [`invalidate`]: CachedProbe::invalidate
#[derive(Debug)]
pub struct CachedProbe<P> {
    inner: P,
    cached: RwLock<Option<AvailableFontSet>>,
}

impl<P: FontAvailabilityProbe> CachedProbe<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cached: RwLock::new(None),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Drops the cached answer; the next query rescans.
    pub fn invalidate(&self) {
        if let Ok(mut cached) = self.cached.write() {
            *cached = None;
        }
    }

    /// Returns `false` if the lock is poisoned.
    pub fn is_cached(&self) -> bool {
        self.cached.read().map(|c| c.is_some()).unwrap_or(false)
    }
}

impl<P: FontAvailabilityProbe> FontAvailabilityProbe for CachedProbe<P> {
    fn available_fonts(&self) -> Result<AvailableFontSet, ProbeError> {
        // Fast path: check cache
        {
            let cached = self
                .cached
                .read()
                .map_err(|_| ProbeError::LockPoisoned("probe cache"))?;
            if let Some(available) = cached.as_ref() {
                return Ok(available.clone());
            }
        }

        log::debug!("Probe cache miss; querying {}", self.inner.name());
        let available = self.inner.available_fonts()?;

        let mut cached = self
            .cached
            .write()
            .map_err(|_| ProbeError::LockPoisoned("probe cache"))?;
        Ok(cached.get_or_insert(available).clone())
    }

    fn name(&self) -> &'static str {
        "CachedProbe"
    }
}
