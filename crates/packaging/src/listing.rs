//! File listings of built distribution artifacts.

use crate::error::PackagingError;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// One entry of an artifact, with a `/`-separated path relative to its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactEntry {
    pub path: String,
    /// Uncompressed size in bytes (0 for directories).
    pub size: u64,
    pub is_dir: bool,
}

impl ArtifactEntry {
    pub fn file(path: impl AsRef<str>, size: u64) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
            size,
            is_dir: false,
        }
    }

    pub fn dir(path: impl AsRef<str>) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
            size: 0,
            is_dir: true,
        }
    }
}

/// Uses `/` separators and strips a leading `./` and any trailing `/`.
fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let path = path.strip_prefix("./").unwrap_or(&path);
    path.trim_end_matches('/').to_string()
}

/// The entries of a built artifact plus its size on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactListing {
    entries: Vec<ArtifactEntry>,
    artifact_size: u64,
}

impl ArtifactListing {
    /// Builds a listing from explicit entries.
    ///
    /// The artifact size is the sum of the file sizes.
    pub fn from_entries<I: IntoIterator<Item = ArtifactEntry>>(entries: I) -> Self {
        let entries: Vec<ArtifactEntry> = entries.into_iter().collect();
        let artifact_size = entries.iter().map(|e| e.size).sum();
        Self {
            entries,
            artifact_size,
        }
    }

    /// Walks an unpacked artifact directory.
    ///
    /// Symbolic links are listed but not followed; their size counts as 0.
    pub fn from_dir<P: AsRef<Path>>(root: P) -> Result<Self, PackagingError> {
        let root = root.as_ref();
        log::debug!("Listing artifact directory {}", root.display());

        let mut entries = Vec::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let entry = entry?;
                let path = entry.path();
                let relative = path.strip_prefix(root).unwrap_or(&path);
                let relative = relative.to_string_lossy();
                let file_type = entry.file_type()?;

                if file_type.is_dir() {
                    entries.push(ArtifactEntry::dir(relative));
                    pending.push(path);
                } else if file_type.is_file() {
                    entries.push(ArtifactEntry::file(relative, entry.metadata()?.len()));
                } else {
                    entries.push(ArtifactEntry::file(relative, 0));
                }
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(Self::from_entries(entries))
    }

    /// Reads the listing of a gzip-compressed tarball on disk.
    ///
    /// The artifact size is the size of the compressed file.
    pub fn from_tar_gz<P: AsRef<Path>>(path: P) -> Result<Self, PackagingError> {
        let path = path.as_ref();
        log::debug!("Listing artifact archive {}", path.display());

        let file = File::open(path)?;
        let artifact_size = file.metadata()?.len();
        Self::from_tar_gz_reader(file, artifact_size).map_err(|e| PackagingError::Archive {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Reads the listing of a gzip-compressed tarball from any reader.
    pub fn from_tar_gz_reader<R: Read>(reader: R, artifact_size: u64) -> std::io::Result<Self> {
        let mut archive = tar::Archive::new(GzDecoder::new(reader));
        let mut entries = Vec::new();
        for entry in archive.entries()? {
            let entry = entry?;
            let path = entry.path()?.to_string_lossy().into_owned();
            if entry.header().entry_type().is_dir() {
                entries.push(ArtifactEntry::dir(path));
            } else {
                entries.push(ArtifactEntry::file(path, entry.size()));
            }
        }
        Ok(Self {
            entries,
            artifact_size,
        })
    }

    pub fn entries(&self) -> &[ArtifactEntry] {
        &self.entries
    }

    /// Size of the artifact as distributed.
    pub fn artifact_size(&self) -> u64 {
        self.artifact_size
    }

    /// Sum of the uncompressed file sizes.
    pub fn content_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Packs files into an in-memory `.tar.gz`, the layout [`ArtifactListing::from_tar_gz`] reads.
///
/// Useful for sizing a reference build: pack the artifact's files plus the font
/// files it would have bundled and feed the length to a `SizeBudget`.
pub fn pack_tar_gz<P, D>(files: &[(P, D)]) -> std::io::Result<Vec<u8>>
where
    P: AsRef<Path>,
    D: AsRef<[u8]>,
{
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut archive = tar::Builder::new(encoder);
    for (path, data) in files {
        let data = data.as_ref();
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        archive.append_data(&mut header, path, data)?;
    }
    archive.into_inner()?.finish()
}
