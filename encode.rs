//! PNG data URLs

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};

use crate::bitmap::Bitmap;
use crate::error::{MaskError, MaskResult};

pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Lossless RGBA8 PNG encoding of `bitmap`
pub fn encode_png(bitmap: &Bitmap) -> MaskResult<Vec<u8>> {
    let invalid = || MaskError::InvalidDimensions {
        width: bitmap.width(),
        height: bitmap.height(),
    };
    let width = u32::try_from(bitmap.width()).map_err(|_| invalid())?;
    let height = u32::try_from(bitmap.height()).map_err(|_| invalid())?;

    let mut buf = Vec::new();
    PngEncoder::new(Cursor::new(&mut buf))
        .write_image(bitmap.as_bytes(), width, height, ExtendedColorType::Rgba8)
        .map_err(|err| MaskError::encode(err.to_string()))?;

    Ok(buf)
}

/// `data:image/png;base64,...` URL of `bitmap`
pub fn to_data_url(bitmap: &Bitmap) -> MaskResult<String> {
    let png = encode_png(bitmap)?;
    let mut url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + png.len().div_ceil(3) * 4);
    url.push_str(PNG_DATA_URL_PREFIX);
    STANDARD.encode_string(&png, &mut url);
    Ok(url)
}

/// Decode a PNG data URL back into pixels
pub fn from_data_url(url: &str) -> MaskResult<Bitmap> {
    let payload = url
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or_else(|| MaskError::decode("not a base64 PNG data URL"))?;

    let png = STANDARD
        .decode(payload)
        .map_err(|err| MaskError::decode(err.to_string()))?;

    let image = image::load_from_memory_with_format(&png, ImageFormat::Png)
        .map_err(|err| MaskError::decode(err.to_string()))?;

    Ok(image.into_rgba8().into())
}

#[cfg(test)]
#[path = "tests/unit/encode.rs"]
mod tests;
