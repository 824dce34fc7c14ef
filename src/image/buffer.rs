//! Owned interleaved raster in row-major layout (stride == width × channels).
use crate::error::WindowError;
use crate::image::StridedImage;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuffer<P> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Interleaved values per pixel
    pub channels: usize,
    /// Backing storage in row-major order
    pub data: Vec<P>,
}

impl<P: Copy + Default> ImageBuffer<P> {
    /// Construct a default-initialized buffer of size `w × h × channels`.
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        Self {
            w,
            h,
            channels,
            data: vec![P::default(); w * h * channels],
        }
    }
}

impl<P: Copy> ImageBuffer<P> {
    /// Take ownership of a packed buffer, checking its length.
    pub fn from_vec(
        w: usize,
        h: usize,
        channels: usize,
        data: Vec<P>,
    ) -> Result<Self, WindowError> {
        if channels == 0 || data.len() != w * h * channels {
            return Err(WindowError::UnsupportedGeometry(format!(
                "buffer of {} elements does not match {w}x{h}x{channels}",
                data.len()
            )));
        }
        Ok(Self {
            w,
            h,
            channels,
            data,
        })
    }

    #[inline]
    /// Convert (x, y, c) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize, c: usize) -> usize {
        (y * self.w + x) * self.channels + c
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> P {
        self.data[self.idx(x, y, c)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, c: usize, v: P) {
        let i = self.idx(x, y, c);
        self.data[i] = v;
    }

    /// Borrow as a read-only strided view.
    pub fn as_view(&self) -> StridedImage<'_, P> {
        StridedImage {
            w: self.w,
            h: self.h,
            channels: self.channels,
            stride: self.w * self.channels,
            data: &self.data,
        }
    }
}

impl<P: Copy> crate::image::traits::ImageView for ImageBuffer<P> {
    type Pixel = P;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn channels(&self) -> usize {
        self.channels
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w * self.channels
    }
    #[inline]
    fn row(&self, y: usize) -> &[P] {
        let len = self.w * self.channels;
        let start = y * len;
        &self.data[start..start + len]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[P]> {
        Some(&self.data)
    }
}
