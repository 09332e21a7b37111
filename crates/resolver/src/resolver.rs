//! Body-font resolution backed by an availability probe.

use crate::chain::FontChain;
use crate::config::ResolverConfig;
use crate::resolve::ResolvedFont;
use fontchain_traits::{AvailableFontSet, FontAvailabilityProbe};
use std::sync::Arc;

/// Resolves the configured chain against whatever the injected probe reports.
///
/// The resolver holds no mutable state, so one instance can serve concurrent
/// render requests.
#[derive(Debug, Clone)]
pub struct FontResolver {
    config: ResolverConfig,
    probe: Arc<dyn FontAvailabilityProbe>,
}

impl FontResolver {
    pub fn new(config: ResolverConfig, probe: Arc<dyn FontAvailabilityProbe>) -> Self {
        Self { config, probe }
    }

    /// Creates a resolver for the default chain.
    pub fn with_probe(probe: Arc<dyn FontAvailabilityProbe>) -> Self {
        Self::new(ResolverConfig::default(), probe)
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn chain(&self) -> &FontChain {
        &self.config.font_chain
    }

    pub fn probe(&self) -> &Arc<dyn FontAvailabilityProbe> {
        &self.probe
    }

    /// Resolves the configured chain against a caller-supplied set.
    pub fn resolve_against(&self, available: &AvailableFontSet) -> ResolvedFont {
        let font = self.config.font_chain.resolve(available);
        if font.is_fallback() {
            log::warn!(
                "None of [{}] is installed; requesting '{}' from the renderer",
                self.config.font_chain,
                font.name()
            );
        }
        font
    }

    /// Queries the probe and resolves the body font for one render.
    ///
    /// A failing probe is treated as a host with no fonts, which yields the last
    /// chain entry rather than an error.
    pub fn resolve_body_font(&self) -> ResolvedFont {
        let available = match self.probe.available_fonts() {
            Ok(available) => {
                log::debug!(
                    "{} reported {} font families",
                    self.probe.name(),
                    available.len()
                );
                available
            }
            Err(e) => {
                log::warn!("{} failed, assuming no fonts: {}", self.probe.name(), e);
                AvailableFontSet::new()
            }
        };
        self.resolve_against(&available)
    }
}
