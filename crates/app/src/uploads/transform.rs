//! Optional image re-encoding stage.

use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

/// Longest allowed edge after resizing.
const MAX_DIMENSION: u32 = 1024;

const JPEG_QUALITY: u8 = 80;

/// Resize image bytes to fit within 1024x1024 (preserving aspect ratio) and
/// re-encode as JPEG. Best-effort: bytes that do not decode as an image
/// pass through unchanged, as do images that fail to re-encode.
#[must_use]
pub fn shrink_image(bytes: Vec<u8>) -> Vec<u8> {
    let Ok(decoded) = image::load_from_memory(&bytes) else {
        debug!("upload is not a decodable image, passing through unchanged");

        return bytes;
    };

    let resized = if decoded.width() > MAX_DIMENSION || decoded.height() > MAX_DIMENSION {
        decoded.thumbnail(MAX_DIMENSION, MAX_DIMENSION)
    } else {
        decoded
    };

    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);

    // JPEG has no alpha channel.
    match encoder.encode_image(&resized.to_rgb8()) {
        Ok(()) => out,
        Err(_) => bytes,
    }
}
