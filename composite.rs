//! Mask compositing
//!
//! The output keeps the base's colors and takes its alpha from the mask.
//! All output alpha is first cleared, then each mask row is walked left
//! to right and its alpha copied to `(x + offset_x, y + offset_y)`:
//! - the first column at or past the right edge ends that row;
//! - columns left of the output are skipped;
//! - rows above or below the output are skipped.

use alloc::string::String;
use log::{debug, trace, warn};

use super::PixelArray;
use crate::bitmap::{byte_len, Bitmap};
use crate::error::{MaskError, MaskResult};
use crate::surface::{Raster, RasterSurface, SoftwareRaster};

/// Parameters of a compositing call
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaskOptions {
    /// Mask translation, relative to the base's top-left corner
    pub offset_x: i64,
    pub offset_y: i64,
    /// Output canvas size, also the extent of the base that gets drawn
    pub width: usize,
    pub height: usize,
    /// Return a PNG data URL instead of raw pixels
    pub encode: bool,
}

impl MaskOptions {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            width,
            height,
            encode: false,
        }
    }

    pub fn offset(mut self, x: i64, y: i64) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    pub fn encoded(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }

    fn validate(&self) -> MaskResult<()> {
        let (width, height) = (self.width, self.height);
        match byte_len(width, height) {
            Some(len) if len > 0 && i64::try_from(width.max(height)).is_ok() => Ok(()),
            _ => Err(MaskError::InvalidDimensions { width, height }),
        }
    }
}

/// Result of a compositing call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskOutput<'a, B: ?Sized> {
    /// Masked pixels, `width` x `height`
    Pixels(Bitmap),
    /// Masked pixels as a `data:image/png;base64,` URL
    DataUrl(String),
    /// The raster could not create surfaces; the base is returned as-is
    Unmasked(&'a B),
}

impl<'a, B: ?Sized> MaskOutput<'a, B> {
    pub fn is_masked(&self) -> bool {
        !matches!(self, Self::Unmasked(_))
    }

    pub fn into_pixels(self) -> Option<Bitmap> {
        match self {
            Self::Pixels(bitmap) => Some(bitmap),
            _ => None,
        }
    }

    pub fn into_data_url(self) -> Option<String> {
        match self {
            Self::DataUrl(url) => Some(url),
            _ => None,
        }
    }
}

/// [`composite_mask`] on the in-memory [`SoftwareRaster`]
pub fn apply_mask<'a, B, M>(
    base: &'a B,
    mask: &M,
    options: &MaskOptions,
) -> MaskResult<MaskOutput<'a, B>>
where
    B: PixelArray + ?Sized,
    M: PixelArray + ?Sized,
{
    composite_mask(&SoftwareRaster, base, mask, options)
}

/// Copy the alpha channel of `mask` onto `base`
///
/// Neither input is modified. If `raster` cannot create a surface, the
/// base is handed back untouched as [`MaskOutput::Unmasked`].
pub fn composite_mask<'a, R, B, M>(
    raster: &R,
    base: &'a B,
    mask: &M,
    options: &MaskOptions,
) -> MaskResult<MaskOutput<'a, B>>
where
    R: Raster + ?Sized,
    B: PixelArray + ?Sized,
    M: PixelArray + ?Sized,
{
    options.validate()?;

    let MaskOptions { width, height, .. } = *options;
    let (mask_w, mask_h) = (mask.width(), mask.height());
    if byte_len(mask_w, mask_h).is_none() {
        return Err(MaskError::InvalidDimensions { width: mask_w, height: mask_h });
    }

    debug!(
        "masking {}x{} base with {}x{} mask at ({}, {}) into {}x{}",
        base.width(), base.height(), mask_w, mask_h,
        options.offset_x, options.offset_y, width, height,
    );

    let Some(mut base_surface) = raster.create_surface(width, height) else {
        warn!("raster surfaces unavailable, returning unmasked image");
        return Ok(MaskOutput::Unmasked(base));
    };

    base_surface.draw_image(base, 0, 0);
    let mut image_data = base_surface.get_pixel_data(0, 0, width, height);

    let alpha_data = if mask_w == 0 || mask_h == 0 {
        Bitmap::new(mask_w, mask_h)
    } else {
        let Some(mut mask_surface) = raster.create_surface(mask_w, mask_h) else {
            warn!("raster surfaces unavailable, returning unmasked image");
            return Ok(MaskOutput::Unmasked(base));
        };
        mask_surface.draw_image(mask, 0, 0);
        mask_surface.get_pixel_data(0, 0, mask_w, mask_h)
    };

    image_data.fill_alpha(0);
    transfer_alpha(&mut image_data, &alpha_data, options.offset_x, options.offset_y);

    if !options.encode {
        return Ok(MaskOutput::Pixels(image_data));
    }

    let Some(mut output) = raster.create_surface(width, height) else {
        warn!("raster surfaces unavailable, returning unmasked image");
        return Ok(MaskOutput::Unmasked(base));
    };
    output.put_pixel_data(&image_data, 0, 0);
    output.encode().map(MaskOutput::DataUrl)
}

/// Write the alpha of every mask pixel into `dst` at the given offset
///
/// `dst` alpha is expected to be cleared beforehand.
fn transfer_alpha(dst: &mut Bitmap, mask: &Bitmap, offset_x: i64, offset_y: i64) {
    let (width, height) = (dst.width() as i64, dst.height() as i64);
    let mut rows_cut = 0usize;
    let mut rows_skipped = 0usize;

    for y in 0..mask.height() {
        let dst_y = (y as i64).saturating_add(offset_y);
        if dst_y < 0 || dst_y >= height {
            rows_skipped += 1;
            continue;
        }
        let dst_row = dst.row_mut(dst_y as usize);

        for (x, src) in mask.row(y).iter().enumerate() {
            let dst_x = (x as i64).saturating_add(offset_x);
            if dst_x >= width {
                // columns only grow from here
                rows_cut += 1;
                break;
            }
            if dst_x >= 0 {
                dst_row[dst_x as usize].a = src.a;
            }
        }
    }

    trace!("alpha transfer: {rows_cut} rows cut at right edge, {rows_skipped} rows outside output");
}

#[cfg(test)]
#[path = "tests/unit/composite.rs"]
mod tests;
