//! First-available resolution over a fallback chain.

use crate::error::ResolveError;
use fontchain_traits::AvailableFontSet;

/// The family chosen for body text.
///
/// `name` is always an entry of the chain it was resolved from, spelled exactly
/// as the chain spells it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFont {
    pub(crate) name: String,
    pub(crate) index: usize,
    pub(crate) fallback: bool,
}

impl ResolvedFont {
    /// The chosen family name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the chosen family within the chain.
    pub fn index(&self) -> usize {
        self.index
    }

    /// `true` when no chain entry was available and the last entry was taken
    /// unconditionally.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl std::fmt::Display for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Selects the first entry of `chain` present in `available`.
///
/// When no entry is available the last entry is returned, so any non-empty
/// chain resolves to something even on a host with no fonts at all.
///
/// # Errors
///
/// Returns `ResolveError::InvalidInput` if `chain` is empty.
pub fn resolve<S: AsRef<str>>(
    chain: &[S],
    available: &AvailableFontSet,
) -> Result<ResolvedFont, ResolveError> {
    let Some(last) = chain.last() else {
        return Err(ResolveError::empty_chain());
    };
    Ok(first_available(chain, available)
        .unwrap_or_else(|| last_resort(last.as_ref(), chain.len() - 1, available)))
}

/// The earliest available entry, or `None` if the host has none of them.
pub(crate) fn first_available<S: AsRef<str>>(
    chain: &[S],
    available: &AvailableFontSet,
) -> Option<ResolvedFont> {
    let index = chain
        .iter()
        .position(|family| available.contains(family.as_ref()))?;
    let name = chain[index].as_ref();
    log::debug!("Resolved body font '{}' at chain index {}", name, index);
    Some(ResolvedFont {
        name: name.to_string(),
        index,
        fallback: false,
    })
}

/// The unconditional pick once every entry has been ruled out.
pub(crate) fn last_resort(name: &str, index: usize, available: &AvailableFontSet) -> ResolvedFont {
    log::debug!(
        "No chain family among {} available fonts; using last resort '{}'",
        available.len(),
        name
    );
    ResolvedFont {
        name: name.to_string(),
        index,
        fallback: true,
    }
}
