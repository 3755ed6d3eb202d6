//! Drawing surfaces
//!
//! A [`Raster`] hands out [`RasterSurface`]s, the equivalent of a 2D
//! canvas context: draw an image, read pixels back, write pixels, encode.
//! A raster that cannot create surfaces makes compositing fall back to
//! the unmasked input.

use alloc::string::String;
use rgb::RGBA8;

use super::PixelArray;
use crate::bitmap::Bitmap;
use crate::error::MaskResult;

const TRANSPARENT: RGBA8 = RGBA8 { r: 0, g: 0, b: 0, a: 0 };

/// Factory for drawing surfaces
pub trait Raster {
    type Surface: RasterSurface;

    /// `None` when the platform has no raster capability
    fn create_surface(&self, width: usize, height: usize) -> Option<Self::Surface>;
}

/// A fixed-size RGBA drawing surface
///
/// Coordinates are signed; anything falling outside the surface is
/// clipped on writes and reads back as transparent black.
pub trait RasterSurface {
    fn width (&self) -> usize;
    fn height(&self) -> usize;

    /// Copy `image` at its natural size with its top-left corner at (x, y)
    fn draw_image<P: PixelArray + ?Sized>(&mut self, image: &P, x: i64, y: i64);

    /// Read back a `width` x `height` rectangle starting at (x, y)
    fn get_pixel_data(&self, x: i64, y: i64, width: usize, height: usize) -> Bitmap;

    /// Write `data` verbatim with its top-left corner at (x, y)
    fn put_pixel_data(&mut self, data: &Bitmap, x: i64, y: i64);

    /// Reset a rectangle to transparent black
    fn clear_rect(&mut self, x: i64, y: i64, width: usize, height: usize);

    /// Encode the whole surface as a data URL
    fn encode(&self) -> MaskResult<String>;
}

/// In-memory raster, always available
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SoftwareRaster;

/// Raster of a platform without compositing support
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoRaster;

impl Raster for SoftwareRaster {
    type Surface = SoftwareSurface;

    fn create_surface(&self, width: usize, height: usize) -> Option<SoftwareSurface> {
        Bitmap::try_new(width, height).ok().map(SoftwareSurface)
    }
}

impl Raster for NoRaster {
    type Surface = SoftwareSurface;

    fn create_surface(&self, _width: usize, _height: usize) -> Option<SoftwareSurface> {
        None
    }
}

/// Surface backed by a [`Bitmap`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoftwareSurface(Bitmap);

impl SoftwareSurface {
    pub fn bitmap(&self) -> &Bitmap {
        &self.0
    }

    pub fn into_bitmap(self) -> Bitmap {
        self.0
    }
}

/// Intersection of `len` units starting at signed `origin` with `[0, bound)`
///
/// Returns `(first destination index, first source index, count)`.
fn clip_span(origin: i64, len: usize, bound: usize) -> Option<(usize, usize, usize)> {
    let start = origin.max(0);
    let end = origin.saturating_add(i64::try_from(len).ok()?).min(i64::try_from(bound).ok()?);
    if start >= end {
        return None;
    }
    let dst = start as usize;
    let src = (start - origin) as usize;
    Some((dst, src, (end - start) as usize))
}

impl SoftwareSurface {
    fn blit_with<F>(&mut self, x: i64, y: i64, width: usize, height: usize, mut pixel: F)
    where
        F: FnMut(usize) -> RGBA8,
    {
        let Some((dst_x, src_x, cols)) = clip_span(x, width, self.0.width()) else {
            return;
        };
        let Some((dst_y, src_y, rows)) = clip_span(y, height, self.0.height()) else {
            return;
        };

        for row in 0..rows {
            let src_row = (src_y + row) * width + src_x;
            let dst = &mut self.0.row_mut(dst_y + row)[dst_x..][..cols];
            for (col, px) in dst.iter_mut().enumerate() {
                *px = pixel(src_row + col);
            }
        }
    }
}

impl RasterSurface for SoftwareSurface {
    fn width(&self) -> usize {
        self.0.width()
    }

    fn height(&self) -> usize {
        self.0.height()
    }

    fn draw_image<P: PixelArray + ?Sized>(&mut self, image: &P, x: i64, y: i64) {
        let len = image.length();
        self.blit_with(x, y, image.width(), image.height(), |i| {
            // short pixel stores read as transparent
            if i < len { image.get(i) } else { TRANSPARENT }
        });
    }

    fn get_pixel_data(&self, x: i64, y: i64, width: usize, height: usize) -> Bitmap {
        let mut out = Bitmap::new(width, height);
        let Some((src_x, dst_x, cols)) = clip_span(x, width, self.0.width()) else {
            return out;
        };
        let Some((src_y, dst_y, rows)) = clip_span(y, height, self.0.height()) else {
            return out;
        };

        for row in 0..rows {
            let src = &self.0.row(src_y + row)[src_x..][..cols];
            out.row_mut(dst_y + row)[dst_x..][..cols].copy_from_slice(src);
        }
        out
    }

    fn put_pixel_data(&mut self, data: &Bitmap, x: i64, y: i64) {
        let pixels = data.pixels();
        self.blit_with(x, y, data.width(), data.height(), |i| pixels[i]);
    }

    fn clear_rect(&mut self, x: i64, y: i64, width: usize, height: usize) {
        self.blit_with(x, y, width, height, |_| TRANSPARENT);
    }

    #[cfg(feature = "png")]
    fn encode(&self) -> MaskResult<String> {
        crate::encode::to_data_url(&self.0)
    }

    #[cfg(not(feature = "png"))]
    fn encode(&self) -> MaskResult<String> {
        Err(crate::error::MaskError::EncoderUnavailable)
    }
}

#[cfg(test)]
#[path = "tests/unit/surface.rs"]
mod tests;
