//! Video file discovery on top of a [`DirectoryScanner`].

use std::path::Path;

use mediakind_classifier::{extension_of, is_video_extension};
use mediakind_core::{FileDescriptor, ScanError};
use tracing::debug;

use crate::walk::{DirectoryScanner, FileIter};

/// Lazily filtered scan results returned by [`VideoLocator::enumerate_video_files`].
pub type VideoFiles<'a> = std::iter::Filter<FileIter<'a>, fn(&FileDescriptor) -> bool>;

/// Whether a scanned file has a video extension. Only the base name is
/// inspected.
pub fn is_video_descriptor(file: &FileDescriptor) -> bool {
    is_video_extension(extension_of(&file.name))
}

/// Finds the video files below a directory.
///
/// The scanner decides what happens with unreadable entries and with a
/// bad root; its errors are returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct VideoLocator<S> {
    scanner: S,
}

impl<S: DirectoryScanner> VideoLocator<S> {
    pub fn new(scanner: S) -> Self {
        Self { scanner }
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// Scan `directory` and return every video file, in scan order.
    pub fn get_all_video_files(&self, directory: &Path) -> Result<Vec<FileDescriptor>, ScanError> {
        let files = self.scanner.scan(directory)?;

        debug!(
            path = %directory.display(),
            scanned = files.len(),
            "beginning to filter for video files"
        );

        let mut videos = Vec::with_capacity(files.len());
        videos.extend(files.into_iter().filter(is_video_descriptor));

        if videos.capacity() > videos.len() * 2 {
            videos.shrink_to_fit();
        }

        debug!(
            path = %directory.display(),
            count = videos.len(),
            "finished filtering for video files"
        );

        Ok(videos)
    }

    /// Scan `directory` lazily, yielding video files as the scanner finds
    /// them. Each call starts a new scan.
    pub fn enumerate_video_files(&self, directory: &Path) -> Result<VideoFiles<'_>, ScanError> {
        debug!(path = %directory.display(), "enumerating video files");
        let files = self.scanner.scan_iter(directory)?;
        Ok(files.filter(is_video_descriptor as fn(&FileDescriptor) -> bool))
    }
}
