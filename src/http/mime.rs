//! Content-type lookup based on file extensions.
//!
//! The table is fixed at compile time and shared by every connection with no
//! synchronization. Lookup is case-sensitive: `HTML` is not `html` and falls
//! through to the generic type.

use std::path::Path;

/// Content type used when the extension is unknown or absent.
pub const FALLBACK: &str = "application/octet-stream";

/// Maps a file extension (no leading dot) to its content-type string.
pub fn resolve(extension: &str) -> &'static str {
    match extension {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "application/gif",
        "mp3" => "audio/mpeg3",
        "mov" => "video/quicktime",
        _ => FALLBACK,
    }
}

/// Resolves the content type for a filesystem path from its extension.
pub fn for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(resolve)
        .unwrap_or(FALLBACK)
}
