//! The packaging audit: no bundled fonts, and a smaller artifact.

use crate::error::PackagingError;
use crate::listing::{ArtifactEntry, ArtifactListing};
use crate::policy::FontAssetPolicy;
use std::path::Path;

/// The size a font-free build must beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBudget {
    /// Size in bytes of a reference build that bundled fonts.
    pub reference_size: u64,
    /// How many bytes smaller the checked artifact must be, at least.
    pub min_reduction: u64,
}

impl SizeBudget {
    pub fn new(reference_size: u64, min_reduction: u64) -> Self {
        Self {
            reference_size,
            min_reduction,
        }
    }

    pub fn check(&self, actual_size: u64) -> SizeCheck {
        let reduction = self.reference_size.saturating_sub(actual_size);
        SizeCheck {
            actual: actual_size,
            reference: self.reference_size,
            required: self.min_reduction,
            reduction,
            passed: actual_size < self.reference_size && reduction >= self.min_reduction,
        }
    }
}

/// Outcome of comparing an artifact against a [`SizeBudget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeCheck {
    pub actual: u64,
    pub reference: u64,
    pub required: u64,
    /// Bytes saved relative to the reference (0 if the artifact is larger).
    pub reduction: u64,
    pub passed: bool,
}

/// Findings of one packaging audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub artifact_size: u64,
    pub entry_count: usize,
    pub font_assets: Vec<ArtifactEntry>,
    pub size: Option<SizeCheck>,
}

impl AuditReport {
    /// `true` when nothing font-like is bundled and any size budget is met.
    pub fn is_clean(&self) -> bool {
        self.font_assets.is_empty() && self.size.is_none_or(|s| s.passed)
    }

    /// Converts the first violation into an error.
    ///
    /// Bundled fonts are reported before a missed size budget.
    pub fn into_result(self) -> Result<Self, PackagingError> {
        if !self.font_assets.is_empty() {
            return Err(PackagingError::BundledFonts {
                paths: self.font_assets.into_iter().map(|e| e.path).collect(),
            });
        }
        if let Some(size) = self.size
            && !size.passed
        {
            return Err(PackagingError::SizeNotReduced {
                actual: size.actual,
                reference: size.reference,
                required: size.required,
            });
        }
        Ok(self)
    }
}

/// Audits a listing against a font-asset policy and an optional size budget.
pub fn audit(
    listing: &ArtifactListing,
    policy: &FontAssetPolicy,
    budget: Option<SizeBudget>,
) -> AuditReport {
    let font_assets: Vec<ArtifactEntry> = policy
        .font_assets(listing.entries())
        .into_iter()
        .cloned()
        .collect();

    for asset in &font_assets {
        log::warn!("Bundled font asset: {}", asset.path);
    }

    let size = budget.map(|b| b.check(listing.artifact_size()));
    if let Some(check) = size {
        log::debug!(
            "Artifact is {} bytes; reference {} bytes; saved {} (need {})",
            check.actual,
            check.reference,
            check.reduction,
            check.required
        );
    }

    AuditReport {
        artifact_size: listing.artifact_size(),
        entry_count: listing.len(),
        font_assets,
        size,
    }
}

/// Lists and audits an artifact on disk.
///
/// Directories are walked; `*.tar.gz` and `*.tgz` files are read as archives.
pub fn audit_path<P: AsRef<Path>>(
    path: P,
    policy: &FontAssetPolicy,
    budget: Option<SizeBudget>,
) -> Result<AuditReport, PackagingError> {
    let path = path.as_ref();
    let listing = if path.is_dir() {
        ArtifactListing::from_dir(path)?
    } else {
        let name = path.to_string_lossy().to_ascii_lowercase();
        if !(name.ends_with(".tar.gz") || name.ends_with(".tgz")) {
            return Err(PackagingError::Archive {
                path: path.display().to_string(),
                message: "expected a directory or a .tar.gz archive".to_string(),
            });
        }
        ArtifactListing::from_tar_gz(path)?
    };
    Ok(audit(&listing, policy, budget))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::pack_tar_gz;
    use std::fs;
    use tempfile::tempdir;

    fn clean_listing() -> ArtifactListing {
        ArtifactListing::from_entries([
            ArtifactEntry::file("pkg/DESCRIPTION", 200),
            ArtifactEntry::file("pkg/inst/templates/chart.typ", 800),
        ])
    }

    #[test]
    fn test_size_budget() {
        let budget = SizeBudget::new(10_000, 4_000);
        assert!(budget.check(5_000).passed);
        assert!(budget.check(6_000).passed);
        assert!(!budget.check(6_001).passed);
        assert!(!budget.check(12_000).passed);
        assert_eq!(budget.check(12_000).reduction, 0);
    }

    #[test]
    fn test_equal_size_is_not_a_reduction() {
        assert!(!SizeBudget::new(1_000, 0).check(1_000).passed);
        assert!(SizeBudget::new(1_000, 0).check(999).passed);
    }

    #[test]
    fn test_clean_artifact() {
        let policy = FontAssetPolicy::standard().unwrap();
        let report = audit(&clean_listing(), &policy, Some(SizeBudget::new(500_000, 100_000)));
        assert!(report.is_clean());
        assert_eq!(report.entry_count, 2);
        assert_eq!(report.artifact_size, 1_000);
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_bundled_fonts_reported() {
        let listing = ArtifactListing::from_entries([
            ArtifactEntry::file("pkg/DESCRIPTION", 200),
            ArtifactEntry::dir("pkg/inst/fonts"),
            ArtifactEntry::file("pkg/inst/fonts/Mari-Regular.ttf", 150_000),
        ]);
        let policy = FontAssetPolicy::standard().unwrap();
        let report = audit(&listing, &policy, None);
        assert!(!report.is_clean());
        assert_eq!(report.font_assets.len(), 2);

        match report.into_result() {
            Err(PackagingError::BundledFonts { paths }) => {
                assert_eq!(paths, vec!["pkg/inst/fonts", "pkg/inst/fonts/Mari-Regular.ttf"]);
            }
            other => panic!("expected BundledFonts, got {other:?}"),
        }
    }

    #[test]
    fn test_missed_budget_reported() {
        let policy = FontAssetPolicy::standard().unwrap();
        let report = audit(&clean_listing(), &policy, Some(SizeBudget::new(1_500, 600)));
        assert!(!report.is_clean());
        let err = report.into_result().unwrap_err();
        assert!(matches!(
            err,
            PackagingError::SizeNotReduced {
                actual: 1_000,
                reference: 1_500,
                required: 600
            }
        ));
    }

    #[test]
    fn test_audit_path_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("inst/fonts")).unwrap();
        fs::write(dir.path().join("inst/fonts/Roboto.ttf"), b"font").unwrap();

        let policy = FontAssetPolicy::standard().unwrap();
        let report = audit_path(dir.path(), &policy, None).unwrap();
        assert_eq!(report.font_assets.len(), 2);
    }

    #[test]
    fn test_audit_path_archive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pkg_1.0.tgz");
        fs::write(&path, pack_tar_gz(&[("pkg/DESCRIPTION", "Package: pkg")]).unwrap()).unwrap();

        let policy = FontAssetPolicy::standard().unwrap();
        let report = audit_path(&path, &policy, None).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.entry_count, 1);
    }

    #[test]
    fn test_audit_path_rejects_other_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pkg.zip");
        fs::write(&path, b"PK").unwrap();

        let policy = FontAssetPolicy::standard().unwrap();
        let result = audit_path(&path, &policy, None);
        assert!(matches!(result, Err(PackagingError::Archive { .. })));
    }

    #[test]
    fn test_error_messages() {
        let err = PackagingError::BundledFonts {
            paths: vec!["a/fonts".to_string(), "a/fonts/x.ttf".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Artifact bundles 2 font asset(s): a/fonts, a/fonts/x.ttf"
        );
    }
}
