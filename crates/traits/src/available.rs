//! The set of font families a host can actually render.

use std::collections::HashSet;

/// Font families installed or known on the current host.
///
/// Membership is exact: `"arial"` does not match an installed `"Arial"`.
/// Probes are expected to insert the spelling their font database reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableFontSet {
    families: HashSet<String>,
}

impl AvailableFontSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a family. Returns `false` if it was already present.
    ///
    /// Blank names are ignored.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.trim().is_empty() {
            return false;
        }
        self.families.insert(name)
    }

    /// Removes a family, returning `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.families.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.families.contains(name)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Iterates over the family names in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(String::as_str)
    }

    /// Returns the family names sorted, for stable output.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<String>> FromIterator<S> for AvailableFontSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for AvailableFontSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}
