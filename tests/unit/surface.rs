use super::*;

const RED: RGBA8 = RGBA8 { r: 255, g: 0, b: 0, a: 255 };

fn surface(width: usize, height: usize) -> SoftwareSurface {
    SoftwareRaster.create_surface(width, height).unwrap()
}

#[test]
fn no_raster_has_no_surfaces() {
    assert!(NoRaster.create_surface(4, 4).is_none());
    assert!(SoftwareRaster.create_surface(4, 4).is_some());
}

#[test]
fn draw_image_is_clipped() {
    let mut s = surface(3, 3);
    s.draw_image(&Bitmap::filled(2, 2, RED), 2, -1);

    let out = s.bitmap();
    assert_eq!(out.pixel(2, 0), RED);
    assert_eq!(out.pixel(1, 0), TRANSPARENT);
    assert_eq!(out.pixel(2, 1), TRANSPARENT);
}

#[test]
fn smaller_image_leaves_transparent_area() {
    let mut s = surface(4, 2);
    s.draw_image(&Bitmap::filled(2, 1, RED), 0, 0);

    let data = s.get_pixel_data(0, 0, 4, 2);
    assert_eq!(data.pixel(1, 0), RED);
    assert_eq!(data.pixel(2, 0), TRANSPARENT);
    assert_eq!(data.pixel(0, 1), TRANSPARENT);
}

#[test]
fn get_pixel_data_outside_reads_transparent() {
    let mut s = surface(2, 2);
    s.draw_image(&Bitmap::filled(2, 2, RED), 0, 0);

    let data = s.get_pixel_data(-1, 1, 3, 3);
    assert_eq!((data.width(), data.height()), (3, 3));
    assert_eq!(data.pixel(0, 0), TRANSPARENT);
    assert_eq!(data.pixel(1, 0), RED);
    assert_eq!(data.pixel(2, 0), RED);
    assert_eq!(data.pixel(1, 1), TRANSPARENT);

    let far = s.get_pixel_data(10, 10, 2, 2);
    assert!(far.pixels().iter().all(|px| *px == TRANSPARENT));
}

#[test]
fn put_pixel_data_replaces_alpha_too() {
    let mut s = surface(2, 1);
    s.draw_image(&Bitmap::filled(2, 1, RED), 0, 0);

    let half = Bitmap::filled(1, 1, RGBA8::new(0, 255, 0, 0));
    s.put_pixel_data(&half, 1, 0);

    assert_eq!(s.bitmap().pixel(0, 0), RED);
    assert_eq!(s.bitmap().pixel(1, 0), RGBA8::new(0, 255, 0, 0));
}

#[test]
fn clear_rect_resets_region() {
    let mut s = surface(3, 1);
    s.draw_image(&Bitmap::filled(3, 1, RED), 0, 0);
    s.clear_rect(1, 0, 5, 5);

    assert_eq!(s.bitmap().pixel(0, 0), RED);
    assert_eq!(s.bitmap().pixel(1, 0), TRANSPARENT);
    assert_eq!(s.bitmap().pixel(2, 0), TRANSPARENT);
}

#[test]
fn clip_span_handles_negative_origins() {
    assert_eq!(clip_span(-2, 5, 4), Some((0, 2, 3)));
    assert_eq!(clip_span(1, 2, 4), Some((1, 0, 2)));
    assert_eq!(clip_span(4, 2, 4), None);
    assert_eq!(clip_span(-3, 3, 4), None);
}

#[cfg(feature = "png")]
#[test]
fn encode_produces_png_data_url() {
    let mut s = surface(1, 1);
    s.draw_image(&Bitmap::filled(1, 1, RED), 0, 0);
    let url = s.encode().unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
}

#[cfg(not(feature = "png"))]
#[test]
fn encode_without_png_feature_fails() {
    assert_eq!(surface(1, 1).encode(), Err(crate::MaskError::EncoderUnavailable));
}

/// Source whose pixel count overflows `usize`
struct Wide;

impl PixelArray for Wide {
    fn get(&self, _index: usize) -> RGBA8 {
        RED
    }

    fn width(&self) -> usize {
        usize::MAX / 2
    }

    fn height(&self) -> usize {
        3
    }
}

#[test]
fn huge_sources_draw_clipped() {
    assert_eq!(Wide.length(), usize::MAX);

    let mut s = surface(1, 3);
    s.draw_image(&Wide, 0, 0);
    assert!(s.bitmap().pixels().iter().all(|px| *px == RED));
}
