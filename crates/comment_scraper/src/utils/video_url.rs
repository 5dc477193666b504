use once_cell::sync::Lazy;
use regex::Regex;

// 11-character id after `v=` or after a path separator.
static VIDEO_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("valid video id pattern"));

/// Extracts the video id from a watch, short-link or embed URL. The first
/// (leftmost) candidate wins.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERN
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}
