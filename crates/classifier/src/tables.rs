use std::sync::LazyLock;

use mediakind_core::MediaFormatSet;

use crate::caseless::{CaselessMap, ExtensionSet};

// Entries keep their leading dot and are stored lowercase.

static VIDEO_EXTENSIONS: &[&str] = &[
    ".asf", ".avi", ".mov", ".mkv", ".mp4", ".wmv", ".m2ts", ".ts", ".mpegts", ".3gpp", ".flv",
    ".wtv", ".mpeg", ".mpg", ".m4v", ".3gp", ".webm", ".divx",
];

static AUDIO_EXTENSIONS: &[&str] = &[".aac", ".alac", ".e-ac3", ".flac", ".mp3", ".m4a", ".wav"];

static SUBTITLE_EXTENSIONS: &[&str] = &[".srt", ".smi", ".ssa", ".ass", ".vtt"];

// Artwork types a media server picks up next to the video.
static IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpeg", ".jpg", ".tbn", ".ext"];

static MKV_MEDIA: MediaFormatSet = MediaFormatSet {
    video_codecs: &[
        "h264",
        "hevc",
        "h265",
        "mpeg4",
        "msmpeg4v2",
        "msmpeg4v3",
        "vc1",
        "vp9",
        "wmv3",
    ],
    audio_codecs: &["aac", "ac3", "flac", "e-ac3", "mp2", "mp3"],
};

pub(crate) static VIDEO: LazyLock<ExtensionSet> =
    LazyLock::new(|| ExtensionSet::new(VIDEO_EXTENSIONS));

pub(crate) static AUDIO: LazyLock<ExtensionSet> =
    LazyLock::new(|| ExtensionSet::new(AUDIO_EXTENSIONS));

pub(crate) static SUBTITLE: LazyLock<ExtensionSet> =
    LazyLock::new(|| ExtensionSet::new(SUBTITLE_EXTENSIONS));

pub(crate) static IMAGE: LazyLock<ExtensionSet> =
    LazyLock::new(|| ExtensionSet::new(IMAGE_EXTENSIONS));

pub(crate) static CONTAINER_MEDIA_SETS: LazyLock<CaselessMap<MediaFormatSet>> =
    LazyLock::new(|| [(".mkv", MKV_MEDIA)].into_iter().collect());
