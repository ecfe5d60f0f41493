use serde::Deserialize;

/// Directory names a NAS or desktop trash leaves behind in media libraries.
pub const LIBRARY_JUNK_DIRS: &[&str] = &["@eaDir", "#recycle", ".Trash"];

/// Traversal settings for [`crate::walk::WalkDirScanner`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub follow_links: bool,
    /// `None` walks the whole tree. Depth 1 is the root's direct children.
    pub max_depth: Option<usize>,
    /// Skip files and directories whose name starts with `.`.
    pub skip_hidden: bool,
    /// Directory names never descended into (exact match).
    pub ignored_dirs: Vec<String>,
}

impl ScanOptions {
    /// Defaults tuned for media libraries: hidden entries and NAS junk
    /// directories are skipped.
    pub fn media_library() -> Self {
        let mut options = Self::default();
        options.skip_library_junk();
        options
    }

    /// Skip hidden entries and add [`LIBRARY_JUNK_DIRS`] to the ignored
    /// directories, keeping any already listed.
    pub fn skip_library_junk(&mut self) {
        self.skip_hidden = true;
        for dir in LIBRARY_JUNK_DIRS {
            if !self.is_ignored_dir(dir) {
                self.ignored_dirs.push(dir.to_string());
            }
        }
    }

    /// Read options from `MEDIAKIND_*` environment variables, falling back
    /// to [`ScanOptions::default`] for anything unset or unparsable.
    ///
    /// `MEDIAKIND_SKIP_HIDDEN` behaves like [`ScanOptions::skip_library_junk`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let follow_links = lookup("MEDIAKIND_FOLLOW_LINKS")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.follow_links);
        let max_depth = lookup("MEDIAKIND_MAX_DEPTH")
            .and_then(|v| v.trim().parse().ok())
            .or(defaults.max_depth);
        let skip_hidden = lookup("MEDIAKIND_SKIP_HIDDEN")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.skip_hidden);
        let ignored_dirs = lookup("MEDIAKIND_IGNORED_DIRS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or(defaults.ignored_dirs);

        let mut options = Self {
            follow_links,
            max_depth,
            skip_hidden: false,
            ignored_dirs,
        };
        if skip_hidden {
            options.skip_library_junk();
        }
        options
    }

    pub(crate) fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.iter().any(|d| d == name)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
