//! Static asset suffixes that are never pre-rendered.

use std::sync::LazyLock;

pub const STATIC_SUFFIXES: &[&str] = &[
    ".js", ".css", ".xml", ".less", ".png", ".jpg", ".jpeg", ".gif", ".pdf", ".doc", ".txt",
    ".ico", ".rss", ".zip", ".mp3", ".rar", ".exe", ".wmv", ".avi", ".ppt", ".mpg", ".mpeg",
    ".tif", ".wav", ".mov", ".psd", ".ai", ".xls", ".mp4", ".m4a", ".swf", ".dat", ".dmg",
    ".iso", ".flv", ".m4v", ".torrent", ".ttf", ".woff", ".svg", ".eot",
];

static STATIC_SUFFIXES_LOWER: LazyLock<Vec<String>> =
    LazyLock::new(|| STATIC_SUFFIXES.iter().map(|s| s.to_lowercase()).collect());

/// Returns true if the URI path ends with a static asset suffix.
///
/// The whole URI is compared, so `/app.js/` or `/feed.xml.html` are not
/// static.
pub fn has_static_suffix(uri: &str) -> bool {
    let uri = uri.to_lowercase();
    STATIC_SUFFIXES_LOWER
        .iter()
        .any(|suffix| uri.ends_with(suffix.as_str()))
}
