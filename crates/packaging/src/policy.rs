//! Which artifact paths count as bundled font assets.

use crate::error::PackagingError;
use crate::listing::ArtifactEntry;
use regex::Regex;

/// Matches a `font`/`fonts` path component or a font file extension.
pub const DEFAULT_FONT_ASSET_PATTERN: &str =
    r"(?i)(^|/)fonts?(/|$)|\.(ttf|otf|ttc|woff2?|pfb|afm)$";

/// A path pattern identifying font assets in an artifact listing.
#[derive(Debug, Clone)]
pub struct FontAssetPolicy {
    pattern: Regex,
}

impl FontAssetPolicy {
    /// Compiles a custom pattern, matched against `/`-separated relative paths.
    pub fn new(pattern: &str) -> Result<Self, PackagingError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The policy built from [`DEFAULT_FONT_ASSET_PATTERN`].
    pub fn standard() -> Result<Self, PackagingError> {
        Self::new(DEFAULT_FONT_ASSET_PATTERN)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn is_font_asset(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }

    /// Returns the entries this policy flags.
    pub fn font_assets<'a>(&self, entries: &'a [ArtifactEntry]) -> Vec<&'a ArtifactEntry> {
        entries
            .iter()
            .filter(|entry| self.is_font_asset(&entry.path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_policy_flags_font_files() {
        let policy = FontAssetPolicy::standard().unwrap();
        assert!(policy.is_font_asset("pkg/inst/Mari-Regular.ttf"));
        assert!(policy.is_font_asset("pkg/inst/Mari-Bold.OTF"));
        assert!(policy.is_font_asset("assets/Roboto.woff2"));
        assert!(policy.is_font_asset("assets/Roboto.woff"));
        assert!(policy.is_font_asset("collection.ttc"));
    }

    #[test]
    fn test_standard_policy_flags_font_directories() {
        let policy = FontAssetPolicy::standard().unwrap();
        assert!(policy.is_font_asset("pkg/inst/fonts"));
        assert!(policy.is_font_asset("pkg/inst/fonts/LICENSE.txt"));
        assert!(policy.is_font_asset("fonts/readme.md"));
        assert!(policy.is_font_asset("pkg/Font/x"));
    }

    #[test]
    fn test_standard_policy_ignores_lookalikes() {
        let policy = FontAssetPolicy::standard().unwrap();
        assert!(!policy.is_font_asset("pkg/R/fonts.R"));
        assert!(!policy.is_font_asset("pkg/R/font_chain.R"));
        assert!(!policy.is_font_asset("pkg/inst/templates/chart.typ"));
        assert!(!policy.is_font_asset("pkg/man/fontsize.Rd"));
        assert!(!policy.is_font_asset("pkg/ttf.txt"));
    }

    #[test]
    fn test_custom_pattern() {
        let policy = FontAssetPolicy::new(r"\.pfb$").unwrap();
        assert!(policy.is_font_asset("type1/cm.pfb"));
        assert!(!policy.is_font_asset("Mari.ttf"));
        assert_eq!(policy.pattern(), r"\.pfb$");
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FontAssetPolicy::new("(unclosed");
        assert!(matches!(result, Err(PackagingError::InvalidPattern(_))));
    }

    #[test]
    fn test_font_assets_filter() {
        let entries = [
            ArtifactEntry::file("pkg/DESCRIPTION", 10),
            ArtifactEntry::dir("pkg/inst/fonts"),
            ArtifactEntry::file("pkg/inst/fonts/Mari.ttf", 100),
        ];
        let policy = FontAssetPolicy::standard().unwrap();
        let flagged = policy.font_assets(&entries);
        assert_eq!(flagged.len(), 2);
        assert_eq!(flagged[1].path, "pkg/inst/fonts/Mari.ttf");
    }
}
