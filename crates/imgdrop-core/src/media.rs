//! Selected files and their declared content type.
//!
//! A desktop drop or file dialog hands us a path, not a MIME type, so the
//! declared type comes from the extension. Extension-less names fall back to
//! sniffing the leading bytes.

use std::ffi::OsStr;
use std::path::Path;

use bytes::Bytes;
use image::ImageFormat;

use crate::error::{UploadError, UploadResult};

/// Fallback when nothing better is known.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Extensions offered by the file picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico", "avif", "svg",
];

/// A file the user dropped or picked, ready to be validated and uploaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name without directories
    pub name: String,
    /// Declared content type, e.g. `image/png`
    pub content_type: String,
    /// File contents
    pub data: Bytes,
}

impl SelectedFile {
    /// Build a file and derive its declared content type.
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let name = name.into();
        let data = data.into();
        let content_type = declared_content_type(&name, &data);
        Self {
            name,
            content_type,
            data,
        }
    }

    /// Build a file whose content type is already known.
    pub fn with_content_type(
        name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Read a file from disk. Only the final path component is kept as name.
    pub async fn from_path(path: &Path) -> UploadResult<Self> {
        let data = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("upload")
            .to_string();
        Ok(Self::new(name, data))
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    /// Reject anything that is not declared as an image.
    pub fn ensure_image(&self) -> UploadResult<()> {
        if self.is_image() {
            Ok(())
        } else {
            Err(UploadError::InvalidFile {
                name: self.name.clone(),
                content_type: self.content_type.clone(),
            })
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Content type a browser would declare for this file.
pub fn declared_content_type(name: &str, data: &[u8]) -> String {
    match Path::new(name).extension().and_then(OsStr::to_str) {
        Some(ext) => content_type_for_extension(ext).to_string(),
        None => image::guess_format(data)
            .map(|format| format.to_mime_type())
            .unwrap_or(OCTET_STREAM)
            .to_string(),
    }
}

fn content_type_for_extension(ext: &str) -> &'static str {
    let ext = ext.to_ascii_lowercase();
    if let Some(format) = ImageFormat::from_extension(&ext) {
        return format.to_mime_type();
    }
    match ext.as_str() {
        "svg" => "image/svg+xml",
        "heic" | "heif" => "image/heic",
        "txt" | "md" => "text/plain",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        _ => OCTET_STREAM,
    }
}

/// Human-readable byte count for the result panel.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn test_extension_drives_content_type() {
        assert_eq!(declared_content_type("cat.png", b""), "image/png");
        assert_eq!(declared_content_type("cat.JPG", b""), "image/jpeg");
        assert_eq!(declared_content_type("cat.webp", b""), "image/webp");
        assert_eq!(declared_content_type("logo.svg", b""), "image/svg+xml");
        assert_eq!(declared_content_type("notes.txt", b""), "text/plain");
        assert_eq!(declared_content_type("archive.xyz", b""), OCTET_STREAM);
    }

    #[test]
    fn test_extension_wins_over_contents() {
        // Browsers trust the name, not the bytes.
        let file = SelectedFile::new("renamed.txt", PNG_MAGIC.to_vec());
        assert_eq!(file.content_type, "text/plain");
        assert!(!file.is_image());
    }

    #[test]
    fn test_sniff_without_extension() {
        assert_eq!(declared_content_type("screenshot", PNG_MAGIC), "image/png");
        assert_eq!(declared_content_type("README", b"hello"), OCTET_STREAM);
    }

    #[test]
    fn test_ensure_image() {
        let image = SelectedFile::new("a.gif", b"GIF89a".to_vec());
        assert!(image.ensure_image().is_ok());

        let doc = SelectedFile::new("a.pdf", b"%PDF".to_vec());
        match doc.ensure_image() {
            Err(UploadError::InvalidFile { name, content_type }) => {
                assert_eq!(name, "a.pdf");
                assert_eq!(content_type, "application/pdf");
            }
            other => panic!("expected InvalidFile, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_content_type_is_kept() {
        let file = SelectedFile::with_content_type("blob", "image/avif", vec![1, 2, 3]);
        assert!(file.is_image());
        assert_eq!(file.size(), 3);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
