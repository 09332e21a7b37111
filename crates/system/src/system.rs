//! Host font enumeration through fontdb.
//!
//! Only family names are collected. No font data is read beyond what fontdb
//! needs to index a face, and no font is ever bundled with the crate.

use fontchain_traits::{AvailableFontSet, FontAvailabilityProbe, ProbeError};
use std::path::PathBuf;

/// Reports the families fontdb finds on the host.
///
/// Every call rescans; wrap it in [`CachedProbe`](crate::CachedProbe) to scan
/// once per render session.
#[derive(Debug, Clone)]
pub struct SystemFontProbe {
    system_fonts: bool,
    font_dirs: Vec<PathBuf>,
}

impl Default for SystemFontProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemFontProbe {
    /// Creates a probe that scans the platform's system font directories.
    pub fn new() -> Self {
        Self {
            system_fonts: true,
            font_dirs: Vec::new(),
        }
    }

    /// Enables or disables the system font directories.
    pub fn with_system_fonts(mut self, enable: bool) -> Self {
        self.system_fonts = enable;
        self
    }

    /// Adds a directory to scan on top of the system fonts.
    pub fn with_font_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.font_dirs.push(dir.into());
        self
    }

    pub fn with_font_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.font_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    pub fn font_dirs(&self) -> &[PathBuf] {
        &self.font_dirs
    }

    #[cfg(feature = "system-fonts")]
    fn load_database(&self) -> fontdb::Database {
        let mut db = fontdb::Database::new();
        if self.system_fonts {
            db.load_system_fonts();
        }
        for dir in &self.font_dirs {
            log::debug!("Scanning font directory {}", dir.display());
            db.load_fonts_dir(dir);
        }
        db
    }
}

/// Collects every family name of every face in a fontdb database.
///
/// Faces often carry localized family names; all of them count as available,
/// spelled the way the font's name table spells them.
#[cfg(feature = "system-fonts")]
pub fn families_in_database(db: &fontdb::Database) -> AvailableFontSet {
    db.faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
        .collect()
}

#[cfg(feature = "system-fonts")]
impl FontAvailabilityProbe for SystemFontProbe {
    fn available_fonts(&self) -> Result<AvailableFontSet, ProbeError> {
        let db = self.load_database();
        let available = families_in_database(&db);
        log::debug!(
            "fontdb indexed {} faces in {} families",
            db.len(),
            available.len()
        );
        Ok(available)
    }

    fn name(&self) -> &'static str {
        "SystemFontProbe"
    }
}

#[cfg(not(feature = "system-fonts"))]
impl FontAvailabilityProbe for SystemFontProbe {
    fn available_fonts(&self) -> Result<AvailableFontSet, ProbeError> {
        Err(ProbeError::Unavailable(format!(
            "built without the system-fonts feature (system fonts {}, {} font dirs)",
            if self.system_fonts { "requested" } else { "off" },
            self.font_dirs.len()
        )))
    }

    fn name(&self) -> &'static str {
        "SystemFontProbe"
    }
}


#[cfg(all(test, feature = "system-fonts"))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_directory_reports_no_fonts() {
        let dir = tempdir().unwrap();
        let probe = SystemFontProbe::new()
            .with_system_fonts(false)
            .with_font_dir(dir.path());

        let available = probe.available_fonts().unwrap();
        assert!(available.is_empty());
    }

    #[test]
    fn test_invalid_font_files_are_skipped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Broken.ttf"), b"not a font").unwrap();

        let probe = SystemFontProbe::new()
            .with_system_fonts(false)
            .with_font_dir(dir.path());
        assert!(probe.available_fonts().unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_not_an_error() {
        let dir = tempdir().unwrap();
        let probe = SystemFontProbe::new()
            .with_system_fonts(false)
            .with_font_dir(dir.path().join("does-not-exist"));
        assert!(probe.available_fonts().is_ok());
    }

    #[test]
    fn test_empty_database() {
        let db = fontdb::Database::new();
        assert!(families_in_database(&db).is_empty());
    }

    #[test]
    fn test_builder() {
        let probe = SystemFontProbe::new().with_font_dirs(["a", "b"]).with_font_dir("c");
        assert_eq!(probe.font_dirs().len(), 3);
        assert_eq!(probe.name(), "SystemFontProbe");
    }
}
