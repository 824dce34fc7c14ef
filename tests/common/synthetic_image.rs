use ndarray::Array3;
use sliding_window::image::ImageBuffer;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> ImageBuffer<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = ImageBuffer::new(width, height, 1);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img.set(x, y, 0, val);
        }
    }
    img
}

/// Channel-first array where every element encodes its own coordinates as
/// `c * 10_000 + y * 100 + x`.
pub fn coordinate_chw(channels: usize, height: usize, width: usize) -> Array3<u32> {
    Array3::from_shape_fn((channels, height, width), |(c, y, x)| {
        (c * 10_000 + y * 100 + x) as u32
    })
}

/// Channel-last counterpart of [`coordinate_chw`].
pub fn coordinate_hwc(height: usize, width: usize, channels: usize) -> Array3<u32> {
    Array3::from_shape_fn((height, width, channels), |(y, x, c)| {
        (c * 10_000 + y * 100 + x) as u32
    })
}
