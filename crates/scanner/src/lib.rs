pub mod config;
pub mod locate;
pub mod stream;
pub mod walk;

pub use config::{LIBRARY_JUNK_DIRS, ScanOptions};
pub use locate::{VideoLocator, is_video_descriptor};
pub use walk::{DirectoryScanner, FileIter, WalkDirScanner};
