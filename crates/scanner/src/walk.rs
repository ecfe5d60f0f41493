use std::path::Path;

use mediakind_core::{FileDescriptor, ScanError};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanOptions;

/// Lazily produced scan results.
pub type FileIter<'a> = Box<dyn Iterator<Item = FileDescriptor> + Send + 'a>;

/// Recursive enumeration of the regular files below a root directory.
///
/// Implementations skip entries they cannot read instead of failing; only
/// problems with the root itself are returned as errors.
pub trait DirectoryScanner: Send + Sync {
    /// Start a lazy scan of `root`.
    fn scan_iter(&self, root: &Path) -> Result<FileIter<'_>, ScanError>;

    /// Scan `root` and collect every file.
    fn scan(&self, root: &Path) -> Result<Vec<FileDescriptor>, ScanError> {
        Ok(self.scan_iter(root)?.collect())
    }
}

/// [`DirectoryScanner`] backed by `walkdir`.
///
/// A root that does not exist yields [`ScanError::RootNotFound`], a root
/// that is a file yields [`ScanError::NotADirectory`].
#[derive(Debug, Clone, Default)]
pub struct WalkDirScanner {
    options: ScanOptions,
}

impl WalkDirScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }
}

impl DirectoryScanner for WalkDirScanner {
    fn scan_iter(&self, root: &Path) -> Result<FileIter<'_>, ScanError> {
        check_root(root)?;

        let mut walker = WalkDir::new(root).follow_links(self.options.follow_links);
        if let Some(depth) = self.options.max_depth {
            walker = walker.max_depth(depth);
        }

        let options = &self.options;
        let files = walker
            .into_iter()
            .filter_entry(move |entry| keep_entry(options, entry))
            .filter_map(|result| match result {
                Ok(entry) => descriptor_for(entry),
                Err(e) => {
                    warn!(path = ?e.path(), error = %e, "skipping unreadable entry");
                    None
                }
            });

        Ok(Box::new(files))
    }
}

fn check_root(root: &Path) -> Result<(), ScanError> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ScanError::RootNotFound(root.to_path_buf()))
        }
        Err(e) => Err(ScanError::Io(e)),
    }
}

fn keep_entry(options: &ScanOptions, entry: &DirEntry) -> bool {
    // The root is always walked, whatever its name.
    if entry.depth() == 0 {
        return true;
    }

    let name = entry.file_name().to_string_lossy();

    if options.skip_hidden && name.starts_with('.') {
        debug!(path = %entry.path().display(), "skipping hidden entry");
        return false;
    }

    if entry.file_type().is_dir() && options.is_ignored_dir(&name) {
        debug!(path = %entry.path().display(), "skipping ignored directory");
        return false;
    }

    true
}

fn descriptor_for(entry: DirEntry) -> Option<FileDescriptor> {
    if !entry.file_type().is_file() {
        return None;
    }

    let metadata = match entry.metadata() {
        Ok(m) => m,
        Err(e) => {
            warn!(path = %entry.path().display(), error = %e, "cannot read file metadata");
            return None;
        }
    };

    Some(FileDescriptor {
        name: entry.file_name().to_string_lossy().into_owned(),
        path: entry.into_path(),
        size_bytes: metadata.len(),
    })
}
