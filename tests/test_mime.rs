use std::path::Path;

use filament::http::mime;

#[test]
fn test_known_extensions_map_exactly() {
    let table = vec![
        ("html", "text/html"),
        ("htm", "text/html"),
        ("css", "text/css"),
        ("js", "application/javascript"),
        ("pdf", "application/pdf"),
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("gif", "application/gif"),
        ("mp3", "audio/mpeg3"),
        ("mov", "video/quicktime"),
    ];

    for (extension, expected) in table {
        assert_eq!(mime::resolve(extension), expected, "extension {extension}");
    }
}

#[test]
fn test_unknown_extension_falls_back() {
    assert_eq!(mime::resolve("exe"), "application/octet-stream");
    assert_eq!(mime::resolve("tar.gz"), "application/octet-stream");
    assert_eq!(mime::resolve(""), "application/octet-stream");
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert_eq!(mime::resolve("HTML"), "application/octet-stream");
    assert_eq!(mime::resolve("Png"), "application/octet-stream");
}

#[test]
fn test_for_path_uses_extension() {
    assert_eq!(mime::for_path(Path::new("/www/index.html")), "text/html");
    assert_eq!(mime::for_path(Path::new("photo.jpeg")), "image/jpeg");
}

#[test]
fn test_for_path_without_extension_falls_back() {
    assert_eq!(mime::for_path(Path::new("/www/README")), "application/octet-stream");
    assert_eq!(mime::for_path(Path::new("/www/")), "application/octet-stream");
}
