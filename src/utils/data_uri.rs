use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Fallback MIME type for files we cannot classify. Anything without an
/// `image/` prefix fails workflow validation, so unknown files are
/// rejected with the invalid-file-type message.
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Best-effort MIME type from the file extension. The desktop stand-in
/// for a browser's `file.type`.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension().and_then(|e| e.to_str())?;

    match ext.to_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "webp" => Some("image/webp"),
        "tif" | "tiff" => Some("image/tiff"),
        "svg" => Some("image/svg+xml"),
        "ico" => Some("image/x-icon"),
        _ => None,
    }
}

/// Encodes raw file bytes as a `data:<mime>;base64,<payload>` string, the
/// shape the extraction endpoint expects in its JSON body.
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_extensions_map_to_image_mime() {
        assert_eq!(mime_for_path(Path::new("photo.PNG")), Some("image/png"));
        assert_eq!(mime_for_path(Path::new("scan.jpeg")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("a/b/pic.webp")), Some("image/webp"));
    }

    #[test]
    fn non_image_extensions_are_unknown() {
        assert_eq!(mime_for_path(Path::new("notes.txt")), None);
        assert_eq!(mime_for_path(Path::new("archive.zip")), None);
        assert_eq!(mime_for_path(Path::new("no_extension")), None);
    }

    #[test]
    fn encode_produces_data_uri_shape() {
        let uri = encode("image/png", b"hello");
        assert_eq!(uri, "data:image/png;base64,aGVsbG8=");
        assert!(uri.starts_with("data:image/"));
    }
}
