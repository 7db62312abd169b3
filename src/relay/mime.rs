//! Extension based MIME inference.

/// Extension groups and the content type they map to.
const MIME_TABLE: &[(&[&str], &str)] = &[
    (&["html", "htm"], "text/html"),
    (&["jpg", "jpeg"], "image/jpeg"),
    (&["png"], "image/png"),
    (&["svg"], "image/svg+xml"),
    (&["css"], "text/css"),
    (&["js", "mjs"], "text/javascript"),
    (&["gif"], "image/gif"),
    (&["webp"], "image/webp"),
    (&["avif"], "image/avif"),
    (&["bmp"], "image/bmp"),
    (&["ico"], "image/vnd.microsoft.icon"),
    (&["json", "map"], "application/json"),
    (&["pdf"], "application/pdf"),
    (&["xml"], "application/xml"),
    (&["wasm"], "application/wasm"),
    (&["zip"], "application/zip"),
    (&["txt"], "text/plain"),
    (&["csv"], "text/csv"),
    (&["woff"], "font/woff"),
    (&["woff2"], "font/woff2"),
    (&["ttf"], "font/ttf"),
    (&["otf"], "font/otf"),
    (&["mp4"], "video/mp4"),
    (&["webm"], "video/webm"),
    (&["mp3"], "audio/mpeg"),
    (&["wav"], "audio/wav"),
    (&["ogg"], "audio/ogg"),
];

/// Guess a content type from the extension of the last path segment.
///
/// Only the path is consulted; callers must not pass the query or fragment.
/// Matching ignores ASCII case. Returns `None` when the extension is unknown
/// or absent.
pub fn guess_mime(path: &str) -> Option<&'static str> {
    let file_name = path.rsplit('/').next()?;
    let (_, extension) = file_name.rsplit_once('.')?;

    MIME_TABLE
        .iter()
        .find(|(extensions, _)| extensions.iter().any(|e| e.eq_ignore_ascii_case(extension)))
        .map(|(_, mime)| *mime)
}
