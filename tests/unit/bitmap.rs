use super::*;

#[test]
fn new_is_transparent_black() {
    let bitmap = Bitmap::new(3, 2);
    assert_eq!(bitmap.as_bytes().len(), 24);
    assert!(bitmap.as_bytes().iter().all(|&b| b == 0));
    assert_eq!(PixelArray::length(&bitmap), 6);
}

#[test]
fn from_raw_checks_length() {
    assert!(Bitmap::from_raw(2, 2, vec![0; 16]).is_ok());
    assert_eq!(
        Bitmap::from_raw(2, 2, vec![0; 12]),
        Err(MaskError::BufferSize { expected: 16, actual: 12 })
    );
}

#[test]
fn overflowing_dimensions_are_rejected() {
    assert_eq!(
        Bitmap::try_new(usize::MAX, 2),
        Err(MaskError::InvalidDimensions { width: usize::MAX, height: 2 })
    );
}

#[test]
fn pixels_are_row_major() {
    let pixels: Vec<RGBA8> = (0..6u8).map(|i| RGBA8::new(i, i, i, i * 10)).collect();
    let bitmap = Bitmap::from_pixels(3, 2, &pixels).unwrap();

    assert_eq!(bitmap.pixel(2, 0), RGBA8::new(2, 2, 2, 20));
    assert_eq!(bitmap.pixel(0, 1), RGBA8::new(3, 3, 3, 30));
    assert_eq!(bitmap.row(1), &pixels[3..]);
    assert_eq!(bitmap.alpha_channel(), vec![0, 10, 20, 30, 40, 50]);
    assert_eq!(bitmap.as_bytes()[4..8], [1, 1, 1, 10]);
}

#[test]
fn fill_alpha_keeps_colors() {
    let mut bitmap = Bitmap::filled(2, 2, RGBA8::new(9, 8, 7, 255));
    bitmap.fill_alpha(0);
    assert!(bitmap.pixels().iter().all(|px| *px == RGBA8::new(9, 8, 7, 0)));
}

#[test]
fn copies_any_pixel_array() {
    let src = Bitmap::filled(2, 3, RGBA8::new(1, 2, 3, 4));
    let copy = Bitmap::from_pixel_array(&src);
    assert_eq!(copy, src);
}

#[cfg(feature = "png")]
#[test]
fn converts_to_and_from_rgba_image() {
    let bitmap = Bitmap::filled(3, 1, RGBA8::new(10, 20, 30, 40));
    let image = image::RgbaImage::try_from(bitmap.clone()).unwrap();
    assert_eq!(image.get_pixel(2, 0).0, [10, 20, 30, 40]);
    assert_eq!(Bitmap::from(image), bitmap);
}

#[test]
#[should_panic(expected = "invalid dimensions")]
fn new_panics_on_overflow() {
    Bitmap::new(usize::MAX, 2);
}
