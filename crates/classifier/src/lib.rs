//! Extension-based file classification.
//!
//! Extensions are compared ASCII case-insensitively and must carry their
//! leading dot (`".mkv"`, `".MKV"`). Anything else simply does not match;
//! no function here fails or panics.

pub mod caseless;
mod tables;

use mediakind_core::{MediaCategory, MediaFormatSet};

pub use caseless::{CaselessMap, ExtensionSet};

/// Check if an extension (with leading dot) is a video container.
pub fn is_video_extension(extension: &str) -> bool {
    tables::VIDEO.contains(extension)
}

pub fn is_audio_extension(extension: &str) -> bool {
    tables::AUDIO.contains(extension)
}

pub fn is_subtitle_extension(extension: &str) -> bool {
    tables::SUBTITLE.contains(extension)
}

pub fn is_image_extension(extension: &str) -> bool {
    tables::IMAGE.contains(extension)
}

/// Check if a path or bare filename has a video extension.
pub fn is_video_file(path_or_name: &str) -> bool {
    is_video_extension(extension_of(path_or_name))
}

/// Check if a path or bare filename has an artwork extension.
pub fn is_image_file(path_or_name: &str) -> bool {
    is_image_extension(extension_of(path_or_name))
}

pub fn is_audio_file(path_or_name: &str) -> bool {
    is_audio_extension(extension_of(path_or_name))
}

pub fn is_subtitle_file(path_or_name: &str) -> bool {
    is_subtitle_extension(extension_of(path_or_name))
}

/// Look up the codecs a container extension can carry.
pub fn try_get_container_media_set(extension: &str) -> Option<&'static MediaFormatSet> {
    tables::CONTAINER_MEDIA_SETS.get(extension)
}

/// The extension table backing a category.
pub fn extensions(category: MediaCategory) -> &'static ExtensionSet {
    match category {
        MediaCategory::Video => &tables::VIDEO,
        MediaCategory::Audio => &tables::AUDIO,
        MediaCategory::Subtitle => &tables::SUBTITLE,
        MediaCategory::Image => &tables::IMAGE,
    }
}

/// Every category whose table contains `extension`, in declaration order.
pub fn categories_of(extension: &str) -> Vec<MediaCategory> {
    MediaCategory::ALL
        .into_iter()
        .filter(|c| extensions(*c).contains(extension))
        .collect()
}

/// Extension of the last segment of a path or filename, including the dot.
///
/// Both `/` and `\` separate segments. Returns `""` when the segment has no
/// dot or ends with one.
pub fn extension_of(path_or_name: &str) -> &str {
    let name = path_or_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(path_or_name);

    match name.rfind('.') {
        Some(pos) if pos + 1 < name.len() => &name[pos..],
        _ => "",
    }
}
