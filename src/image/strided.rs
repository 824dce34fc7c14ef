use crate::error::WindowError;
use crate::geometry::Rect;

/// Borrowed interleaved raster with an arbitrary row stride.
///
/// Crops share the parent's backing slice and stride, so a window view of an
/// image never copies pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StridedImage<'a, P> {
    pub w: usize,
    pub h: usize,
    pub channels: usize,
    pub stride: usize, // elements between row starts
    pub data: &'a [P],
}

impl<'a, P: Copy> StridedImage<'a, P> {
    /// Wrap a tightly packed `h × w × channels` buffer.
    pub fn from_raw(
        w: usize,
        h: usize,
        channels: usize,
        data: &'a [P],
    ) -> Result<Self, WindowError> {
        let stride = w * channels;
        if channels == 0 || data.len() < stride * h {
            return Err(WindowError::UnsupportedGeometry(format!(
                "buffer of {} elements cannot hold {w}x{h}x{channels}",
                data.len()
            )));
        }
        Ok(Self {
            w,
            h,
            channels,
            stride,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> P {
        self.data[y * self.stride + x * self.channels + c]
    }

    /// Non-copying sub-view covering `rect`.
    pub fn crop(&self, rect: Rect) -> Result<StridedImage<'a, P>, WindowError> {
        let right = rect.x.saturating_add(rect.w);
        if right > self.w {
            return Err(WindowError::OutOfBounds {
                axis: 1,
                end: right,
                extent: self.w,
            });
        }
        let bottom = rect.y.saturating_add(rect.h);
        if bottom > self.h {
            return Err(WindowError::OutOfBounds {
                axis: 0,
                end: bottom,
                extent: self.h,
            });
        }
        let start = rect.y * self.stride + rect.x * self.channels;
        let end = if rect.is_empty() {
            start
        } else {
            (bottom - 1) * self.stride + right * self.channels
        };
        Ok(StridedImage {
            w: rect.w,
            h: rect.h,
            channels: self.channels,
            stride: self.stride,
            data: &self.data[start..end],
        })
    }
}

impl<'a, P: Copy> crate::image::traits::ImageView for StridedImage<'a, P> {
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
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[P] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.channels]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[P]> {
        let len = self.w * self.h * self.channels;
        (self.stride == self.w * self.channels).then_some(&self.data[..len])
    }
}
