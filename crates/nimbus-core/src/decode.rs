use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::{ImageFormat, RgbImage};
use tracing::debug;

use crate::client::ImageEntry;
use crate::error::{NimbusError, Result};

/// The only payload encoding the catalog emits.
const JPEG_TAG: &str = "data:image/jpg";

/// Decode a catalog image series into full-color frames.
///
/// The catalog returns entries newest-first; the output is oldest-first so
/// the frames animate forward in time. Any malformed entry aborts the whole
/// series; no partial frame list escapes.
pub fn decode_series(entries: &[ImageEntry]) -> Result<Vec<RgbImage>> {
    let mut frames = Vec::with_capacity(entries.len());
    for entry in entries.iter().rev() {
        frames.push(decode_entry(entry)?);
    }
    Ok(frames)
}

fn decode_entry(entry: &ImageEntry) -> Result<RgbImage> {
    let (mime, body) = entry
        .base64
        .split_once(";base64,")
        .ok_or(NimbusError::MalformedDataUri)?;
    if mime != JPEG_TAG {
        return Err(NimbusError::UnexpectedMime(mime.to_string()));
    }
    let bytes = BASE64.decode(body)?;
    debug!(name = %entry.nome, hora = %entry.hora, "decoding frame");
    let img = image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg)?;
    Ok(img.to_rgb8())
}
