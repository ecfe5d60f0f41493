//! Async access to the video locator for tokio callers.
//!
//! Directory walking blocks, so scans run on tokio's blocking pool. The
//! stream variant hands results over a bounded channel; dropping the stream
//! stops the walk at the next entry it scans.

use std::path::PathBuf;
use std::sync::Arc;

use futures::Stream;
use mediakind_core::{FileDescriptor, ScanError};
use tokio::sync::mpsc;
use tracing::debug;

use crate::locate::{VideoLocator, is_video_descriptor};
use crate::walk::DirectoryScanner;

/// Files buffered between the walking thread and the consumer.
pub const STREAM_BUFFER: usize = 64;

/// Run [`VideoLocator::get_all_video_files`] on the blocking pool.
pub async fn get_all_video_files_async<S>(
    locator: Arc<VideoLocator<S>>,
    directory: PathBuf,
) -> Result<Vec<FileDescriptor>, ScanError>
where
    S: DirectoryScanner + 'static,
{
    tokio::task::spawn_blocking(move || locator.get_all_video_files(&directory))
        .await
        .map_err(|e| ScanError::Task(e.to_string()))?
}

/// Stream the video files below `directory` as they are found.
///
/// A scan setup failure is yielded as the only item. Nothing runs until
/// the stream is first polled.
pub fn video_file_stream<S>(
    locator: Arc<VideoLocator<S>>,
    directory: PathBuf,
) -> impl Stream<Item = Result<FileDescriptor, ScanError>> + Send + 'static
where
    S: DirectoryScanner + 'static,
{
    async_stream::stream! {
        let (tx, mut rx) = mpsc::channel(STREAM_BUFFER);

        let walker = tokio::task::spawn_blocking(move || {
            let scanned = match locator.scanner().scan_iter(&directory) {
                Ok(scanned) => scanned,
                Err(e) => {
                    let _ = tx.blocking_send(Err(e));
                    return;
                }
            };
            // Checked per scanned entry so a dropped stream also stops a
            // walk through files that are never sent.
            let files = scanned
                .take_while(|_| !tx.is_closed())
                .filter(is_video_descriptor);
            for file in files {
                if tx.blocking_send(Ok(file)).is_err() {
                    break;
                }
            }
            if tx.is_closed() {
                debug!(path = %directory.display(), "video stream dropped, stopping scan");
            }
        });

        while let Some(item) = rx.recv().await {
            yield item;
        }

        if let Err(e) = walker.await {
            yield Err(ScanError::Task(e.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use futures::StreamExt;

    use crate::walk::FileIter;

    /// Produces `total` video files and counts how many were pulled.
    struct CountingScanner {
        total: usize,
        produced: Arc<AtomicUsize>,
    }

    impl DirectoryScanner for CountingScanner {
        fn scan_iter(&self, root: &Path) -> Result<FileIter<'_>, ScanError> {
            let root = root.to_path_buf();
            let produced = self.produced.clone();
            Ok(Box::new((0..self.total).map(move |i| {
                produced.fetch_add(1, Ordering::SeqCst);
                FileDescriptor::from_path(root.join(format!("clip{i}.mkv")))
            })))
        }
    }

    /// Three videos, then a long run of non-video files that each take a
    /// moment to scan.
    struct MostlyOtherFilesScanner {
        others: usize,
        produced: Arc<AtomicUsize>,
    }

    impl DirectoryScanner for MostlyOtherFilesScanner {
        fn scan_iter(&self, root: &Path) -> Result<FileIter<'_>, ScanError> {
            let root = root.to_path_buf();
            let produced = self.produced.clone();
            let videos = (0..3).map(|i| format!("clip{i}.mkv"));
            let others = (0..self.others).map(|i| format!("notes{i}.txt"));
            Ok(Box::new(videos.chain(others).map(move |name| {
                if name.ends_with(".txt") {
                    std::thread::sleep(Duration::from_micros(50));
                }
                produced.fetch_add(1, Ordering::SeqCst);
                FileDescriptor::from_path(root.join(name))
            })))
        }
    }

    struct PanickingScanner;

    impl DirectoryScanner for PanickingScanner {
        fn scan_iter(&self, _root: &Path) -> Result<FileIter<'_>, ScanError> {
            panic!("scanner exploded");
        }
    }

    fn counting(total: usize) -> (Arc<VideoLocator<CountingScanner>>, Arc<AtomicUsize>) {
        let produced = Arc::new(AtomicUsize::new(0));
        let locator = VideoLocator::new(CountingScanner {
            total,
            produced: produced.clone(),
        });
        (Arc::new(locator), produced)
    }

    #[tokio::test]
    async fn stream_yields_everything() {
        let (locator, _) = counting(200);
        let items: Vec<_> = video_file_stream(locator, PathBuf::from("/lib"))
            .collect()
            .await;
        assert_eq!(items.len(), 200);
        assert!(items.iter().all(|r| r.is_ok()));
    }

    #[tokio::test]
    async fn async_materialized_matches_stream() {
        let (locator, _) = counting(10);
        let all = get_all_video_files_async(locator.clone(), PathBuf::from("/lib"))
            .await
            .unwrap();
        let streamed: Vec<_> = video_file_stream(locator, PathBuf::from("/lib"))
            .map(|r| r.unwrap())
            .collect()
            .await;
        assert_eq!(all, streamed);
    }

    #[tokio::test]
    async fn dropping_the_stream_stops_the_scan() {
        let (locator, produced) = counting(1_000_000);
        let taken: Vec<_> = video_file_stream(locator, PathBuf::from("/lib"))
            .take(3)
            .collect()
            .await;
        assert_eq!(taken.len(), 3);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let after = produced.load(Ordering::SeqCst);
        assert!(after <= 3 + STREAM_BUFFER + 2, "scan kept running: {after}");
    }

    #[tokio::test]
    async fn dropping_the_stream_stops_a_walk_through_non_videos() {
        let produced = Arc::new(AtomicUsize::new(0));
        let locator = Arc::new(VideoLocator::new(MostlyOtherFilesScanner {
            others: 200_000,
            produced: produced.clone(),
        }));

        let taken: Vec<_> = video_file_stream(locator, PathBuf::from("/lib"))
            .take(3)
            .collect()
            .await;
        assert_eq!(taken.len(), 3);
        let at_drop = produced.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(300)).await;
        let after = produced.load(Ordering::SeqCst);
        assert!(
            after - at_drop <= 2,
            "walk kept running after the stream was dropped: {at_drop} -> {after}"
        );
    }

    #[tokio::test]
    async fn panicking_scan_surfaces_as_task_error() {
        let locator = Arc::new(VideoLocator::new(PanickingScanner));
        let items: Vec<_> = video_file_stream(locator.clone(), PathBuf::from("/lib"))
            .collect()
            .await;
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(ScanError::Task(_))));

        let err = get_all_video_files_async(locator, PathBuf::from("/lib"))
            .await
            .unwrap_err();
        assert!(matches!(err, ScanError::Task(_)));
    }
}
