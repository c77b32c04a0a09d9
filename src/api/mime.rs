// src/api/mime.rs
//! Content types for the image formats Ghost accepts.

use std::path::Path;

pub const PNG: &str = "image/png";
pub const JPEG: &str = "image/jpeg";
pub const GIF: &str = "image/gif";
pub const WEBP: &str = "image/webp";
pub const AVIF: &str = "image/avif";
pub const SVG: &str = "image/svg+xml";
pub const ICO: &str = "image/x-icon";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Guess the upload content type from the file extension.
///
/// Unknown extensions fall back to `application/octet-stream` and are
/// left for Ghost to accept or reject.
pub fn image_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => PNG,
        Some("jpg" | "jpeg") => JPEG,
        Some("gif") => GIF,
        Some("webp") => WEBP,
        Some("avif") => AVIF,
        Some("svg" | "svgz") => SVG,
        Some("ico") => ICO,
        _ => OCTET_STREAM,
    }
}
