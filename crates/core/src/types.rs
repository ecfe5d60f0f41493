use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A regular file found while scanning a directory tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub path: PathBuf,
    pub name: String,
    #[serde(default)]
    pub size_bytes: u64,
}

impl FileDescriptor {
    /// Build a descriptor from a path, deriving the base name from its last
    /// component. Size is left at zero.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            size_bytes: 0,
        }
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Codecs a container can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MediaFormatSet {
    pub video_codecs: &'static [&'static str],
    pub audio_codecs: &'static [&'static str],
}

impl MediaFormatSet {
    pub fn supports_video_codec(&self, codec: &str) -> bool {
        self.video_codecs
            .iter()
            .any(|c| c.eq_ignore_ascii_case(codec))
    }

    pub fn supports_audio_codec(&self, codec: &str) -> bool {
        self.audio_codecs
            .iter()
            .any(|c| c.eq_ignore_ascii_case(codec))
    }
}

/// Category a file extension can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaCategory {
    Video,
    Audio,
    Subtitle,
    Image,
}

impl MediaCategory {
    pub const ALL: [MediaCategory; 4] = [Self::Video, Self::Audio, Self::Subtitle, Self::Image];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Subtitle => "subtitle",
            Self::Image => "image",
        }
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_name_from_path() {
        let d = FileDescriptor::from_path("/media/movies/Heat (1995).mkv").with_size(42);
        assert_eq!(d.name, "Heat (1995).mkv");
        assert_eq!(d.size_bytes, 42);
        assert_eq!(d.path(), Path::new("/media/movies/Heat (1995).mkv"));
    }

    #[test]
    fn descriptor_json_shape() {
        let d = FileDescriptor::from_path("/a/b.mp4");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["name"], "b.mp4");
        assert_eq!(json["path"], "/a/b.mp4");
        assert_eq!(json["size_bytes"], 0);
    }

    #[test]
    fn format_set_codec_checks_ignore_case() {
        let set = MediaFormatSet {
            video_codecs: &["h264", "hevc"],
            audio_codecs: &["aac"],
        };
        assert!(set.supports_video_codec("H264"));
        assert!(set.supports_audio_codec("AAC"));
        assert!(!set.supports_video_codec("av1"));
        assert!(!set.supports_audio_codec("opus"));
    }

    #[test]
    fn category_display() {
        assert_eq!(MediaCategory::Subtitle.to_string(), "subtitle");
        assert_eq!(
            serde_json::to_value(MediaCategory::Image).unwrap(),
            serde_json::json!("image")
        );
    }
}
