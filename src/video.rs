//! YouTube video id extraction.

use regex::Regex;
use std::sync::LazyLock;

/// Recognizes YouTube watch/short/embed URLs, anchored at the start:
/// optional scheme (also scheme-relative `//`), optional `www.`, host
/// `youtube.com` or `youtu.be`, then an optional `watch?v=` / `v/` /
/// `embed/` segment before the id.
static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:https?:)?//)?(?:www\.)?youtu(?:be\.com|\.be)/(?:watch\?v=|v/|embed/)?([A-Za-z0-9_-]+)").unwrap()
});

/// Extract the video id from a YouTube URL.
///
/// Returns `None` when the input does not start with a recognized YouTube
/// URL form; there is no partial or fuzzy matching.
///
/// # Example
/// ```ignore
/// assert_eq!(youtube_video_id("https://youtu.be/xyz789"), Some("xyz789"));
/// assert_eq!(youtube_video_id("not a url"), None);
/// ```
pub fn youtube_video_id(source: &str) -> Option<&str> {
    VIDEO_ID
        .captures(source)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}
