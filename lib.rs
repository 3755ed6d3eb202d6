//! Alpha Masking for RGBA bitmaps
//!
//! Copies the alpha channel of a mask bitmap onto a base bitmap, at an
//! offset, keeping the base's color channels. Typical use is applying a
//! PNG-24 mask to a decoded picture:
//!
//! ```
//! use alpha_mask::rgb::RGBA8;
//! use alpha_mask::{apply_mask, Bitmap, MaskOptions, MaskOutput};
//!
//! let base = Bitmap::filled(4, 4, RGBA8::new(255, 0, 0, 255));
//! let mask = Bitmap::filled(2, 2, RGBA8::new(0, 0, 0, 128));
//!
//! let options = MaskOptions::new(4, 4).offset(1, 1);
//! let MaskOutput::Pixels(out) = apply_mask(&base, &mask, &options)? else {
//!     unreachable!()
//! };
//! assert_eq!(out.pixel(1, 1).a, 128);
//! assert_eq!(out.pixel(0, 0).a, 0);
//! # Ok::<(), alpha_mask::MaskError>(())
//! ```
//!
//! Drawing goes through the [`Raster`] trait; [`SoftwareRaster`] is the
//! in-memory implementation used by [`apply_mask`].
//!
//! Features:
//! - `std` (default)
//! - `png` (default): encoded output as a `data:image/png;base64,` URL

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

use rgb::RGBA8;

mod bitmap;
mod composite;
mod error;
mod surface;

#[cfg(feature = "png")]
mod encode;

#[doc(inline)]
pub use bitmap::Bitmap;

#[doc(inline)]
pub use composite::{apply_mask, composite_mask, MaskOptions, MaskOutput};

#[doc(inline)]
pub use error::{MaskError, MaskResult};

#[doc(inline)]
pub use surface::{NoRaster, Raster, RasterSurface, SoftwareRaster, SoftwareSurface};

#[cfg(feature = "png")]
#[doc(inline)]
pub use encode::{encode_png, from_data_url, to_data_url, PNG_DATA_URL_PREFIX};

pub use rgb;

/// Trait for 2D-sized & indexed pixel storage
///
/// Pixels are addressed row-major: `index = y * width() + x`.
pub trait PixelArray {
    fn get   (&self, index: usize) -> RGBA8;
    fn width (&self) -> usize;
    fn height(&self) -> usize;

    fn length(&self) -> usize {
        self.width().saturating_mul(self.height())
    }
}

impl<P: PixelArray + ?Sized> PixelArray for &P {
    fn get   (&self, index: usize) -> RGBA8 { (**self).get(index) }
    fn width (&self) -> usize { (**self).width() }
    fn height(&self) -> usize { (**self).height() }
    fn length(&self) -> usize { (**self).length() }
}

#[cfg(feature = "png")]
impl PixelArray for image::RgbaImage {
    fn get(&self, index: usize) -> RGBA8 {
        let px = &self.as_raw()[index * 4..][..4];
        RGBA8::new(px[0], px[1], px[2], px[3])
    }

    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }
}
