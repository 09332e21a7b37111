//! Preference-ordered font family chains.

use crate::error::ResolveError;
use crate::resolve::{ResolvedFont, first_available, last_resort};
use fontchain_traits::AvailableFontSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The chain a document template requests unless the caller overrides it.
///
/// The branded family comes first, then widely distributed families, then a
/// generic family every rendering backend maps to its own default.
pub const DEFAULT_FONT_CHAIN: [&str; 5] = ["Mari", "Roboto", "Arial", "Helvetica", "sans-serif"];

/// A non-empty, ordered list of font family names.
///
/// Entries are kept exactly as given, duplicates included. The last entry is
/// the fallback of last resort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FontChain {
    families: Vec<String>,
}

impl FontChain {
    /// Builds a chain from families in preference order.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::InvalidInput` if no family is given.
    pub fn new<I, S>(families: I) -> Result<Self, ResolveError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let families: Vec<String> = families.into_iter().map(Into::into).collect();
        if families.is_empty() {
            return Err(ResolveError::empty_chain());
        }
        Ok(Self { families })
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// The most preferred family.
    pub fn preferred(&self) -> &str {
        &self.families[0]
    }

    /// The family used when nothing else is installed.
    pub fn last_resort(&self) -> &str {
        &self.families[self.last_index()]
    }

    /// Resolves the chain against the fonts available on a host.
    pub fn resolve(&self, available: &AvailableFontSet) -> ResolvedFont {
        first_available(self.families.as_slice(), available)
            .unwrap_or_else(|| last_resort(self.last_resort(), self.last_index(), available))
    }

    // `new` rejects empty chains, so this never underflows.
    fn last_index(&self) -> usize {
        self.families.len() - 1
    }
}

impl Default for FontChain {
    fn default() -> Self {
        Self {
            families: DEFAULT_FONT_CHAIN.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for FontChain {
    type Error = ResolveError;

    fn try_from(families: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(families)
    }
}

impl From<FontChain> for Vec<String> {
    fn from(chain: FontChain) -> Self {
        chain.families
    }
}

/// Parses a comma-separated list such as `"Mari, Roboto, sans-serif"`.
///
/// Whitespace around each entry is trimmed and blank entries are dropped.
impl FromStr for FontChain {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(
            s.split(',')
                .map(str::trim)
                .filter(|family| !family.is_empty()),
        )
    }
}

impl fmt::Display for FontChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.families.join(", "))
    }
}
