use log::{debug, warn};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::errors::DiscoveryError;

// @module: File discovery and in-place rewriting

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    /// Expand input roots into the documents to process.
    ///
    /// Files are taken as given, whatever their extension. Directories are
    /// crawled recursively for files whose name ends with `suffix`. A root
    /// that cannot be stat'ed fails the whole discovery. A file reached
    /// twice, under whatever spelling, is listed once as first given.
    pub fn discover<P: AsRef<Path>>(roots: &[P], suffix: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for root in roots {
            let root = root.as_ref();
            let metadata = fs::metadata(root).map_err(|source| DiscoveryError::InputNotFound {
                path: root.to_path_buf(),
                source,
            })?;

            if metadata.is_dir() {
                for path in Self::find_files(root, suffix) {
                    if seen.insert(Self::identity(&path)) {
                        files.push(path);
                    }
                }
            } else if metadata.is_file() {
                if seen.insert(Self::identity(root)) {
                    files.push(root.to_path_buf());
                }
            } else {
                warn!("Skipping {:?}: neither a file nor a directory", root);
            }
        }

        debug!("Discovered {} document(s)", files.len());
        Ok(files)
    }

    /// Find files whose name ends with `suffix` below `dir`.
    ///
    /// Unreadable entries are logged and skipped.
    pub fn find_files<P: AsRef<Path>>(dir: P, suffix: &str) -> Vec<PathBuf> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(suffix) {
                result.push(entry.into_path());
            }
        }

        result
    }

    // @returns: Resolved path used to recognise the same file across spellings
    fn identity(path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
        fs::read_to_string(path)
    }

    /// Replace the content of an existing file.
    ///
    /// The content is written to a temporary file next to `path`, given the
    /// original's permissions, then renamed over it, so readers see either
    /// the old or the new content. Symlinks are written through to their
    /// target. Read-only files are refused.
    pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
        let target = Self::identity(path.as_ref());
        let path = target.as_path();
        let original = fs::metadata(path).ok();
        if original.as_ref().is_some_and(|m| m.permissions().readonly()) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "file is read-only"));
        }

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content.as_bytes())?;
        temp.flush()?;

        if let Some(metadata) = original {
            fs::set_permissions(temp.path(), metadata.permissions())?;
        }

        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
