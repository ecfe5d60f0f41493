pub mod error;
pub mod types;

pub use error::ScanError;
pub use types::{FileDescriptor, MediaCategory, MediaFormatSet};
