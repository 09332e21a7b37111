//! Resolver configuration.
//!
//! The chain is an explicit value handed to the resolver. Nothing reads a
//! process-wide default behind the caller's back; `ResolverConfig::default()`
//! is simply seeded from [`DEFAULT_FONT_CHAIN`](crate::DEFAULT_FONT_CHAIN).
//!
//! Configuration files are JSON:
//!
//! ```json
//! {
//!   "fontChain": ["Mari", "Roboto", "Arial", "Helvetica", "sans-serif"],
//!   "fontDirs": ["/opt/branding/fonts"],
//!   "systemFonts": true
//! }
//! ```
//!
//! Every field is optional.

use crate::chain::FontChain;
use crate::error::ResolveError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ResolverConfig {
    /// Families to request for body text, most preferred first.
    pub font_chain: FontChain,

    /// Extra directories the host probe scans in addition to system fonts.
    pub font_dirs: Vec<PathBuf>,

    /// Whether the host probe loads the system font directories.
    pub system_fonts: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            font_chain: FontChain::default(),
            font_dirs: Vec::new(),
            system_fonts: true,
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::Config` for malformed JSON, unknown fields or an
    /// empty `fontChain`.
    pub fn from_json_str(json: &str) -> Result<Self, ResolveError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ResolveError> {
        let path = path.as_ref();
        log::debug!("Loading resolver config from {}", path.display());
        let json = std::fs::read_to_string(path)
            .map_err(|e| ResolveError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, ResolveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_chain(mut self, chain: FontChain) -> Self {
        self.font_chain = chain;
        self
    }

    pub fn with_font_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.font_dirs.push(dir.into());
        self
    }

    pub fn with_system_fonts(mut self, enable: bool) -> Self {
        self.system_fonts = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::DEFAULT_FONT_CHAIN;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.font_chain.families(), &DEFAULT_FONT_CHAIN);
        assert!(config.font_dirs.is_empty());
        assert!(config.system_fonts);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ResolverConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_parse_full_document() {
        let config = ResolverConfig::from_json_str(
            r#"{
                "fontChain": ["Roboto", "sans-serif"],
                "fontDirs": ["/opt/fonts"],
                "systemFonts": false
            }"#,
        )
        .unwrap();
        assert_eq!(config.font_chain.families(), &["Roboto", "sans-serif"]);
        assert_eq!(config.font_dirs, vec![PathBuf::from("/opt/fonts")]);
        assert!(!config.system_fonts);
    }

    #[test]
    fn test_empty_chain_rejected() {
        let err = ResolverConfig::from_json_str(r#"{ "fontChain": [] }"#).unwrap_err();
        assert!(matches!(err, ResolveError::Config(_)));
        assert!(err.to_string().contains("at least one family"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = ResolverConfig::from_json_str(r#"{ "fontFamily": "Arial" }"#);
        assert!(matches!(result, Err(ResolveError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "fontChain": ["Mari", "serif"] }}"#).unwrap();

        let config = ResolverConfig::from_file(file.path()).unwrap();
        assert_eq!(config.font_chain.last_resort(), "serif");
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ResolverConfig::from_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ResolveError::Config(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = ResolverConfig::new()
            .with_chain("Roboto, sans-serif".parse().unwrap())
            .with_font_dir("fonts")
            .with_system_fonts(false);
        let json = config.to_json_string().unwrap();
        assert_eq!(ResolverConfig::from_json_str(&json).unwrap(), config);
    }
}
