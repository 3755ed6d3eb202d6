use alloc::vec;
use alloc::vec::Vec;
use rgb::{FromSlice, RGBA8};

use super::PixelArray;
use crate::error::{MaskError, MaskResult};

/// Owned RGBA8 pixel grid, row-major, 4 bytes per pixel
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

/// Byte length of a `width` x `height` RGBA8 buffer, if it fits in memory
pub(crate) fn byte_len(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(4)
}

impl Bitmap {
    /// Fully transparent black bitmap
    ///
    /// Panics if `width * height * 4` overflows `usize`; see [`Bitmap::try_new`].
    pub fn new(width: usize, height: usize) -> Self {
        Self::try_new(width, height).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_new(width: usize, height: usize) -> MaskResult<Self> {
        let len = byte_len(width, height)
            .ok_or(MaskError::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Bitmap where every pixel is `pixel`
    pub fn filled(width: usize, height: usize, pixel: RGBA8) -> Self {
        let mut bitmap = Self::new(width, height);
        bitmap.pixels_mut().fill(pixel);
        bitmap
    }

    /// Wrap a raw RGBA8 buffer; its length must be exactly `width * height * 4`
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> MaskResult<Self> {
        let expected = byte_len(width, height)
            .ok_or(MaskError::InvalidDimensions { width, height })?;

        if data.len() != expected {
            return Err(MaskError::BufferSize {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { width, height, data })
    }

    /// Build a bitmap from a row-major list of pixels
    pub fn from_pixels(width: usize, height: usize, pixels: &[RGBA8]) -> MaskResult<Self> {
        let mut data = Vec::with_capacity(pixels.len() * 4);
        for px in pixels {
            data.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        Self::from_raw(width, height, data)
    }

    /// Copy any [`PixelArray`] into an owned bitmap
    pub fn from_pixel_array<P: PixelArray + ?Sized>(src: &P) -> Self {
        let mut bitmap = Self::new(src.width(), src.height());
        for (i, px) in bitmap.pixels_mut().iter_mut().enumerate() {
            *px = src.get(i);
        }
        bitmap
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn pixels(&self) -> &[RGBA8] {
        self.data.as_rgba()
    }

    pub fn pixels_mut(&mut self) -> &mut [RGBA8] {
        self.data.as_rgba_mut()
    }

    /// Pixel at (x, y); panics when out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> RGBA8 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels()[y * self.width + x]
    }

    /// One row of pixels
    pub fn row(&self, y: usize) -> &[RGBA8] {
        &self.pixels()[y * self.width..][..self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [RGBA8] {
        let width = self.width;
        &mut self.pixels_mut()[y * width..][..width]
    }

    /// Alpha channel only, row-major
    pub fn alpha_channel(&self) -> Vec<u8> {
        self.pixels().iter().map(|px| px.a).collect()
    }

    /// Set every alpha channel to `alpha`, leaving colors untouched
    pub fn fill_alpha(&mut self, alpha: u8) {
        for px in self.pixels_mut() {
            px.a = alpha;
        }
    }
}

impl PixelArray for Bitmap {
    fn get(&self, index: usize) -> RGBA8 {
        self.pixels()[index]
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn length(&self) -> usize {
        self.data.len() / 4
    }
}

#[cfg(feature = "png")]
impl From<image::RgbaImage> for Bitmap {
    fn from(image: image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            data: image.into_raw(),
        }
    }
}

#[cfg(feature = "png")]
impl TryFrom<Bitmap> for image::RgbaImage {
    type Error = MaskError;

    fn try_from(bitmap: Bitmap) -> MaskResult<Self> {
        let (width, height) = (bitmap.width, bitmap.height);
        let invalid = MaskError::InvalidDimensions { width, height };
        let w = u32::try_from(width).map_err(|_| invalid.clone())?;
        let h = u32::try_from(height).map_err(|_| invalid.clone())?;
        image::RgbaImage::from_raw(w, h, bitmap.data).ok_or(invalid)
    }
}

#[cfg(test)]
#[path = "tests/unit/bitmap.rs"]
mod tests;
